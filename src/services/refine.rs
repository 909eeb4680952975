//! Prompt refinement: wraps a user's prompt in a fixed instruction, sends it
//! to the completion API, and records both versions against the user.

use std::sync::Arc;
use thiserror::Error;

use crate::clients::openai::{CompletionClient, OpenAiError};
use crate::db::Store;

#[derive(Debug, Error)]
pub enum RefineError {
    #[error("User with given ID not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error(transparent)]
    Completion(#[from] OpenAiError),
}

impl From<anyhow::Error> for RefineError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

pub struct PromptRefinementService {
    store: Store,
    client: Arc<dyn CompletionClient>,
}

impl PromptRefinementService {
    #[must_use]
    pub fn new(store: Store, client: Arc<dyn CompletionClient>) -> Self {
        Self { store, client }
    }

    /// Refine `original_prompt` on behalf of `user_id`.
    ///
    /// The user lookup happens first; an unknown id fails without touching
    /// the completion API. The refined text is trimmed and persisted next to
    /// the original before being returned.
    pub async fn refine_prompt(
        &self,
        original_prompt: &str,
        user_id: i32,
    ) -> Result<String, RefineError> {
        if !self.store.user_exists(user_id).await? {
            return Err(RefineError::UserNotFound);
        }

        let instruction = format!(
            "You are a prompt refiner. Use advanced prompt engineering techniques to refine this prompt: {original_prompt}"
        );

        let completion = self.client.complete(&instruction).await?;
        let refined = completion.trim().to_string();

        self.store
            .record_prompt(user_id, original_prompt, &refined)
            .await?;

        tracing::info!("Refined prompt for user {user_id}");

        Ok(refined)
    }
}
