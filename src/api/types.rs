use serde::{Deserialize, Serialize};

use crate::entities::users::Role;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub user_id: i32,
    pub message: String,
}

/// User details without sensitive fields; the stored password never leaves
/// the repository layer.
#[derive(Debug, Serialize)]
pub struct UserDetailsResponse {
    pub id: i32,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: String,

    /// Arrives as a raw string so an unrecognized value can be answered with
    /// a success=false body instead of a deserialization rejection.
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateUserDetailsResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserLoginResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct PromptSubmissionRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct PromptSubmissionResponse {
    pub message: String,
    pub submitted: bool,
}

#[derive(Debug, Deserialize)]
pub struct RefinePromptRequest {
    pub original_prompt: String,
    pub user_id: i32,
}

#[derive(Debug, Serialize)]
pub struct RefinedPromptResponse {
    pub original_prompt: String,
    pub refined_prompt: String,
}
