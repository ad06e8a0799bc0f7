//! Gemini adapter
//!
//! Handles HTTP communication with Google's Gemini generateContent API.
//! Generation parameters are adapter constants, not caller-configurable.

use std::time::Duration;

use async_trait::async_trait;
use config::GeminiConfig;
use reqwest::{header::HeaderValue, Client};
use serde::{Deserialize, Serialize};

use crate::{
    backend::CompletionBackend,
    errors::CompletionError,
    models::{CompletionRequest, Provider},
};

const GEMINI_MODEL: &str = "gemini-2.0-flash";
const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.95;
const TOP_K: i64 = 40;
const MAX_OUTPUT_TOKENS: i64 = 4096;

/// Gemini adapter - one generateContent call per completion request
pub struct GeminiProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    timeout_seconds: u64,
}

impl GeminiProvider {
    pub fn new(config: &GeminiConfig) -> Self {
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
            "x-goog-api-key",
            HeaderValue::from_str(api_key).map_err(|e| CompletionError::ProviderError {
                provider: Provider::Gemini,
                status: None,
                message: format!("Invalid API key format: {e}"),
            })?,
        );
        Ok(headers)
    }

    fn build_request(&self, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                top_k: TOP_K,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }
}

#[async_trait]
impl CompletionBackend for GeminiProvider {
    fn provider(&self) -> Provider {
        Provider::Gemini
    }

    async fn generate(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingCredential {
                provider: Provider::Gemini,
                env_var: "GEMINI_API_KEY",
            })?;

        let url = format!("{}/models/{GEMINI_MODEL}:generateContent", self.base_url);
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
                        provider: Provider::Gemini,
                        budget_seconds: self.timeout_seconds,
                    }
                } else {
                    CompletionError::ProviderError {
                        provider: Provider::Gemini,
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
                provider: Provider::Gemini,
                status: Some(status_code),
                message: error_text,
            });
        }

        let gemini_response: GeminiResponse =
            response
                .json()
                .await
                .map_err(|e| CompletionError::MalformedResponse {
                    provider: Provider::Gemini,
                    detail: format!("Failed to parse response: {e}"),
                })?;

        // A 2xx body can still carry a vendor error object; never return
        // partial text for those.
        if let Some(error) = gemini_response.error {
            return Err(CompletionError::ProviderError {
                provider: Provider::Gemini,
                status: error.code,
                message: error.message,
            });
        }

        extract_text(&gemini_response).ok_or_else(|| CompletionError::MalformedResponse {
            provider: Provider::Gemini,
            detail: "missing text payload in candidates".to_string(),
        })
    }
}

/// Concatenate the text parts of the first candidate, if any.
fn extract_text(response: &GeminiResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let parts = &candidate.content.as_ref()?.parts;

    let text: String = parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f64,
    top_p: f64,
    top_k: i64,
    max_output_tokens: i64,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    error: Option<GeminiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    code: Option<u16>,
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let provider = GeminiProvider::new(&GeminiConfig::default());
        let body = serde_json::to_value(provider.build_request("hello")).unwrap();

        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["temperature"], 0.7);
        assert_eq!(body["generationConfig"]["topP"], 0.95);
        assert_eq!(body["generationConfig"]["topK"], 40);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 4096);
    }

    #[test]
    fn test_extract_text_concatenates_parts() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Day 1: "},{"text":"Kyoto"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(&response).as_deref(), Some("Day 1: Kyoto"));
    }

    #[test]
    fn test_extract_text_missing_payload() {
        let response: GeminiResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{}]}}]}"#).unwrap();
        assert!(extract_text(&response).is_none());

        let no_candidates: GeminiResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(extract_text(&no_candidates).is_none());
    }
}
