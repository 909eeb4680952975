pub use super::prompts::Entity as Prompts;
pub use super::users::Entity as Users;
