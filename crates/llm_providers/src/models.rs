use std::fmt;
use std::str::FromStr;

use crate::errors::CompletionError;

/// The closed set of supported LLM backends.
///
/// Selectors parse case-insensitively; anything outside the set fails with
/// [`CompletionError::UnsupportedProvider`] before any network call. The
/// default is Gemini, matching the documented behavior of callers that omit
/// a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Provider {
    #[default]
    Gemini,
    Claude,
    Ollama,
}

impl Provider {
    /// Lowercase wire name used in selectors and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::Claude => "claude",
            Provider::Ollama => "ollama",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = CompletionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gemini" => Ok(Provider::Gemini),
            "claude" => Ok(Provider::Claude),
            "ollama" => Ok(Provider::Ollama),
            other => Err(CompletionError::UnsupportedProvider(other.to_string())),
        }
    }
}

/// One completion request as the dispatcher sees it.
///
/// Invariant: `prompt` is non-empty. `model` is honored only by the Ollama
/// adapter; the hosted providers use fixed model constants.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub provider: Provider,
    pub model: Option<String>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, provider: Provider) -> Self {
        Self {
            prompt: prompt.into(),
            provider,
            model: None,
        }
    }

    /// Override the model name. Only meaningful for Ollama requests.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse_is_case_insensitive() {
        assert_eq!("gemini".parse::<Provider>().unwrap(), Provider::Gemini);
        assert_eq!("Claude".parse::<Provider>().unwrap(), Provider::Claude);
        assert_eq!("OLLAMA".parse::<Provider>().unwrap(), Provider::Ollama);
    }

    #[test]
    fn test_provider_parse_rejects_unknown() {
        let error = "GPT-4".parse::<Provider>().unwrap_err();
        match error {
            CompletionError::UnsupportedProvider(name) => assert_eq!(name, "gpt-4"),
            other => panic!("Expected UnsupportedProvider, got {other:?}"),
        }
    }

    #[test]
    fn test_default_provider_is_gemini() {
        assert_eq!(Provider::default(), Provider::Gemini);
    }

    #[test]
    fn test_request_builder() {
        let request = CompletionRequest::new("plan a trip", Provider::Ollama).with_model("mistral");
        assert_eq!(request.prompt, "plan a trip");
        assert_eq!(request.provider, Provider::Ollama);
        assert_eq!(request.model.as_deref(), Some("mistral"));
    }
}
