//! Explanation requests with model fallback
//!
//! This module provides the async HTTP client that asks the generative
//! language API why a quiz answer was right or wrong. A fixed ordered list of
//! model candidates is tried strictly in sequence; only an overload response
//! moves the loop to the next candidate, every other API failure is terminal.

use crate::core::config::Config;
use crate::core::constants::msg;
use crate::core::prompt::build_explanation_prompt;
use crate::models::gemini::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error, warn};

/// One answered quiz question to explain
#[derive(Debug, Clone)]
pub struct ExplanationRequest {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    /// All options shown to the user, in display order. May be empty.
    pub all_answers: Vec<String>,
}

/// Error types that can occur while requesting an explanation
///
/// Every variant's `Display` is the exact text handed to the caller;
/// `Overloaded` never reaches the caller, the candidate loop consumes it.
#[derive(Debug, thiserror::Error)]
pub enum ExplainError {
    #[error("{}", msg::API_KEY_MISSING)]
    ApiKeyMissing,

    #[error("model overloaded")]
    Overloaded,

    #[error("API Error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("{}", msg::UNEXPECTED_RESPONSE)]
    UnexpectedResponse,

    #[error("Unable to generate explanation: {0}")]
    Transport(String),

    #[error("{}", msg::ALL_MODELS_UNAVAILABLE)]
    AllModelsUnavailable,
}

/// Async client for the `generateContent` endpoint with sequential fallback
///
/// Holds no mutable state; independent calls may run concurrently.
pub struct ExplanationRequester {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    models: Vec<String>,
}

impl ExplanationRequester {
    /// Create a new requester from resolved configuration
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            models: config.models.clone(),
        }
    }

    /// Request an explanation for one answered question
    ///
    /// Always returns a displayable string: the generated explanation on
    /// success, a human-readable status message otherwise.
    pub async fn request_explanation(&self, request: &ExplanationRequest) -> String {
        match self.try_explanation(request).await {
            Ok(text) => text,
            Err(e) => e.to_string(),
        }
    }

    async fn try_explanation(&self, request: &ExplanationRequest) -> Result<String, ExplainError> {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("{} is not configured", crate::core::config::API_KEY_ENV);
            return Err(ExplainError::ApiKeyMissing);
        };

        let prompt = build_explanation_prompt(request);

        let last = self.models.len().saturating_sub(1);
        for (index, model) in self.models.iter().enumerate() {
            debug!("Trying model: {}", model);
            match self.send_generate_content(api_key, model, &prompt).await {
                Ok(text) => {
                    debug!("Success with model: {}", model);
                    return Ok(text);
                }
                Err(ExplainError::Overloaded) => {
                    warn!("Model {} is overloaded, trying fallback...", model);
                    continue;
                }
                Err(ExplainError::Transport(detail)) => {
                    error!("Error with model {}: {}", model, detail);
                    if index == last {
                        return Err(ExplainError::Transport(detail));
                    }
                    continue;
                }
                Err(other) => return Err(other),
            }
        }

        Err(ExplainError::AllModelsUnavailable)
    }

    async fn send_generate_content(
        &self,
        api_key: &str,
        model: &str,
        prompt: &str,
    ) -> Result<String, ExplainError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        let body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ExplainError::Transport(e.to_string()))?;

        let status = response.status();

        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Err(ExplainError::Overloaded);
        }

        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| "Unknown error".to_string());
            error!("API Error: {} - {}", status.as_u16(), message);
            return Err(ExplainError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generated: GenerateContentResponse = response
            .json()
            .await
            .map_err(|_| ExplainError::UnexpectedResponse)?;

        match generated.first_text() {
            Some(text) => Ok(text.to_string()),
            None => {
                error!("Unexpected API response from model {}", model);
                Err(ExplainError::UnexpectedResponse)
            }
        }
    }
}
