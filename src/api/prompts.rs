use axum::{Json, extract::State};
use std::sync::Arc;

use super::types::{
    PromptSubmissionRequest, PromptSubmissionResponse, RefinePromptRequest, RefinedPromptResponse,
};
use super::{ApiError, AppState};

/// POST /api/v1/prompts
///
/// Validation echo only: confirms the prompt is non-empty. Nothing is stored
/// or forwarded from this endpoint.
pub async fn receive_prompt(
    Json(payload): Json<PromptSubmissionRequest>,
) -> Json<PromptSubmissionResponse> {
    if payload.prompt.is_empty() {
        return Json(PromptSubmissionResponse {
            message: "Invalid prompt: Input cannot be empty.".to_string(),
            submitted: false,
        });
    }

    Json(PromptSubmissionResponse {
        message: "Prompt received and submitted for refinement.".to_string(),
        submitted: true,
    })
}

/// POST /refine-prompt
pub async fn refine_prompt(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RefinePromptRequest>,
) -> Result<Json<RefinedPromptResponse>, ApiError> {
    let refined = state
        .refine_service
        .refine_prompt(&payload.original_prompt, payload.user_id)
        .await?;

    Ok(Json(RefinedPromptResponse {
        original_prompt: payload.original_prompt,
        refined_prompt: refined,
    }))
}
