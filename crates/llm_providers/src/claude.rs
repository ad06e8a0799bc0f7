//! Claude adapter
//!
//! Handles HTTP communication with Anthropic's Messages API. The prompt is
//! sent as a single user-turn message; model and token ceiling are adapter
//! constants.

use std::time::Duration;

use async_trait::async_trait;
use config::AnthropicConfig;
use reqwest::{header::HeaderValue, Client};
use serde::{Deserialize, Serialize};

use crate::{
    backend::CompletionBackend,
    errors::CompletionError,
    models::{CompletionRequest, Provider},
};

const CLAUDE_MODEL: &str = "claude-3-sonnet-20240229";
const MAX_TOKENS: i64 = 4000;
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claude adapter - one Messages API call per completion request
pub struct ClaudeProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    timeout_seconds: u64,
}

impl ClaudeProvider {
    pub fn new(config: &AnthropicConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            timeout_seconds: config.timeout_seconds,
        }
    }

    fn build_headers(&self, api_key: &str) -> Result<reqwest::header::HeaderMap, CompletionError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key).map_err(|e| CompletionError::ProviderError {
                provider: Provider::Claude,
                status: None,
                message: format!("Invalid API key format: {e}"),
            })?,
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        Ok(headers)
    }

    fn build_request(&self, prompt: &str) -> AnthropicRequest {
        AnthropicRequest {
            model: CLAUDE_MODEL.to_string(),
            max_tokens: MAX_TOKENS,
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        }
    }
}

#[async_trait]
impl CompletionBackend for ClaudeProvider {
    fn provider(&self) -> Provider {
        Provider::Claude
    }

    async fn generate(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingCredential {
                provider: Provider::Claude,
                env_var: "ANTHROPIC_API_KEY",
            })?;

        let url = format!("{}/messages", self.base_url);
        let headers = self.build_headers(api_key)?;
        let body = self.build_request(&request.prompt);

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .timeout(Duration::from_secs(self.timeout_seconds))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout {
                        provider: Provider::Claude,
                        budget_seconds: self.timeout_seconds,
                    }
                } else {
                    CompletionError::ProviderError {
                        provider: Provider::Claude,
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
                provider: Provider::Claude,
                status: Some(status_code),
                message: error_text,
            });
        }

        let anthropic_response: AnthropicResponse =
            response
                .json()
                .await
                .map_err(|e| CompletionError::MalformedResponse {
                    provider: Provider::Claude,
                    detail: format!("Failed to parse response: {e}"),
                })?;

        // Only the first content block's text is used.
        let first_block = anthropic_response
            .content
            .first()
            .ok_or(CompletionError::EmptyResponse {
                provider: Provider::Claude,
            })?;

        first_block
            .text
            .clone()
            .ok_or_else(|| CompletionError::MalformedResponse {
                provider: Provider::Claude,
                detail: "first content block has no text".to_string(),
            })
    }
}

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: i64,
    messages: Vec<AnthropicMessage>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    #[serde(default)]
    content: Vec<AnthropicContentBlock>,
}

#[derive(Debug, Deserialize)]
struct AnthropicContentBlock {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let provider = ClaudeProvider::new(&AnthropicConfig::default());
        let body = serde_json::to_value(provider.build_request("recommend a city")).unwrap();

        assert_eq!(body["model"], "claude-3-sonnet-20240229");
        assert_eq!(body["max_tokens"], 4000);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "recommend a city");
    }

    #[test]
    fn test_response_with_missing_content_defaults_to_empty() {
        let response: AnthropicResponse = serde_json::from_str(r#"{"id":"msg_01"}"#).unwrap();
        assert!(response.content.is_empty());
    }
}
