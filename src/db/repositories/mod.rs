pub mod prompt;
pub mod user;
