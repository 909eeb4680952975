pub mod auth;
pub mod refine;

pub use refine::{PromptRefinementService, RefineError};
