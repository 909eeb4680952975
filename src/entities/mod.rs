pub mod prelude;

pub mod prompts;
pub mod users;
