use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::OpenAiConfig;

#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("OpenAI request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OpenAI API error: {status} - {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("OpenAI returned no completion choices")]
    EmptyChoices,
}

/// Text-completion backend. Abstracted behind a trait so tests can stand in
/// a canned implementation without network access.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Return the first completion choice's text for `prompt`.
    async fn complete(&self, prompt: &str) -> Result<String, OpenAiError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

/// Client for the legacy text-completions endpoint.
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(
                config.request_timeout_seconds,
            )))
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, OpenAiError> {
        let url = format!(
            "{}/v1/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let request = CompletionRequest {
            model: &self.config.model,
            prompt,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OpenAiError::Api { status, body });
        }

        let completion: CompletionResponse = response.json().await?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or(OpenAiError::EmptyChoices)
    }
}
