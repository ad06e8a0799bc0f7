//! Ollama adapter
//!
//! Handles HTTP communication with a self-hosted Ollama endpoint. No
//! credential is required; the model name is caller-overridable and falls
//! back to the configured default. Streaming is disabled - the full
//! completion is awaited as one unit within the wait budget.

use std::time::Duration;

use async_trait::async_trait;
use config::OllamaConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    backend::CompletionBackend,
    errors::CompletionError,
    models::{CompletionRequest, Provider},
};

/// Ollama adapter - one /api/generate call per completion request
pub struct OllamaProvider {
    client: Client,
    base_url: String,
    default_model: String,
    timeout_seconds: u64,
}

impl OllamaProvider {
    pub fn new(config: &OllamaConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            default_model: config.default_model.clone(),
            timeout_seconds: config.timeout_seconds,
        }
    }
}

#[async_trait]
impl CompletionBackend for OllamaProvider {
    fn provider(&self) -> Provider {
        Provider::Ollama
    }

    async fn generate(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let url = format!("{}/api/generate", self.base_url);

        let body = OllamaRequest {
            model,
            prompt: &request.prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(self.timeout_seconds))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout {
                        provider: Provider::Ollama,
                        budget_seconds: self.timeout_seconds,
                    }
                } else {
                    CompletionError::ProviderError {
                        provider: Provider::Ollama,
                        status: None,
                        message: e.to_string(),
                    }
                }
            })?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response body: {e}"));
            return Err(CompletionError::ProviderError {
                provider: Provider::Ollama,
                status: Some(status_code),
                message: error_text,
            });
        }

        let ollama_response: OllamaResponse =
            response
                .json()
                .await
                .map_err(|e| CompletionError::MalformedResponse {
                    provider: Provider::Ollama,
                    detail: format!("Failed to parse response: {e}"),
                })?;

        ollama_response
            .response
            .ok_or_else(|| CompletionError::MalformedResponse {
                provider: Provider::Ollama,
                detail: "missing response field".to_string(),
            })
    }
}

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: Option<String>,
}
