use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::types::{
    CreateUserRequest, CreateUserResponse, DeleteUserResponse, LoginRequest, UpdateUserRequest,
    UpdateUserDetailsResponse, UserDetailsResponse, UserLoginResponse,
};
use super::{ApiError, AppState};
use crate::entities::users::Role;
use crate::services::auth;

/// POST /users
///
/// Hashes and inserts unconditionally; there is no input validation beyond
/// deserialization, so empty strings are accepted as-is.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, ApiError> {
    // Argon2 is CPU-bound; keep it off the async workers.
    let password = payload.password;
    let password_hash = tokio::task::spawn_blocking(move || auth::hash_password(&password))
        .await
        .map_err(|e| ApiError::internal(format!("Password hashing task panicked: {e}")))?
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let user_id = state
        .store
        .create_user(&payload.email, &password_hash, payload.role)
        .await
        .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

    tracing::info!("Created user {user_id}");

    Ok(Json(CreateUserResponse {
        user_id,
        message: "User created successfully.".to_string(),
    }))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<UserDetailsResponse>, ApiError> {
    let user = state
        .store
        .get_user(id)
        .await
        .map_err(|e| ApiError::DatabaseError(e.to_string()))?
        .ok_or_else(|| ApiError::user_not_found(id))?;

    Ok(Json(UserDetailsResponse {
        id: user.id,
        email: user.email,
        role: user.role,
    }))
}

/// PUT /users/{id}
///
/// Updates email and role; the password is immutable through this surface.
/// Datastore failures are reported as success=false in the body rather than
/// propagated; only the role check short-circuits before touching the store.
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Json<UpdateUserDetailsResponse> {
    let Ok(role) = payload.role.parse::<Role>() else {
        return Json(UpdateUserDetailsResponse {
            success: false,
            message: "Invalid role specified.".to_string(),
        });
    };

    match state.store.update_user(id, &payload.email, role).await {
        Ok(()) => Json(UpdateUserDetailsResponse {
            success: true,
            message: "User details have been successfully updated.".to_string(),
        }),
        Err(error) => Json(UpdateUserDetailsResponse {
            success: false,
            message: format!("Failed to update user: {error}"),
        }),
    }
}

/// DELETE /users/{id}
///
/// Deleting an absent id is not an error; the outcome is only distinguishable
/// by the message text.
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    let exists = state
        .store
        .user_exists(id)
        .await
        .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

    if !exists {
        return Ok(Json(DeleteUserResponse {
            message: format!("No user found with ID {id}. No action taken."),
        }));
    }

    state
        .store
        .delete_user(id)
        .await
        .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

    tracing::info!("Deleted user {id}");

    Ok(Json(DeleteUserResponse {
        message: format!("User with ID {id} has been successfully deleted."),
    }))
}

/// POST /users/login
///
/// Looks the user up by email plus the SHA-256 hex digest of the password.
/// Rows created through POST /users store an Argon2 hash in that column
/// instead, so those credentials never match here; the integration suite
/// pins this behavior. The issued token is never persisted.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserLoginResponse>, ApiError> {
    let digest = auth::sha256_hex(&payload.password);

    let user = state
        .store
        .find_user_by_credentials(&payload.email, &digest)
        .await
        .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

    if user.is_none() {
        return Err(ApiError::Unauthorized(
            "Invalid email/password combination.".to_string(),
        ));
    }

    Ok(Json(UserLoginResponse {
        token: auth::generate_session_token(),
    }))
}
