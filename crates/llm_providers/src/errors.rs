use thiserror::Error;

use crate::models::Provider;

/// Classified failures of the completion dispatcher.
///
/// Every variant carries a message suitable for direct user display; callers
/// branch on the variant, never on the message text. Adapters never recover
/// or retry internally; errors propagate to the dispatcher unchanged.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// The provider selector is outside the supported set. Client input
    /// error, never retried.
    #[error("Unsupported LLM provider: {0}")]
    UnsupportedProvider(String),

    /// The selected provider requires a credential that is not configured.
    /// Fatal until the operator fixes the environment; no network call is
    /// made.
    #[error("{provider} API key not configured. Please set the {env_var} environment variable.")]
    MissingCredential {
        provider: Provider,
        env_var: &'static str,
    },

    /// The prompt was empty or all whitespace.
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    /// The upstream response violated the provider's own contract.
    #[error("{provider} API returned an unexpected response format: {detail}")]
    MalformedResponse { provider: Provider, detail: String },

    /// The upstream returned a response with no content to extract.
    #[error("{provider} API returned an empty response")]
    EmptyResponse { provider: Provider },

    /// The upstream rejected or failed the call.
    #[error("{provider} API error{}: {message}", status_suffix(.status))]
    ProviderError {
        provider: Provider,
        status: Option<u16>,
        message: String,
    },

    /// The upstream exceeded the wait budget. Distinct from other provider
    /// errors so callers may apply their own retry policy.
    #[error("{provider} API request timed out after {budget_seconds}s")]
    Timeout {
        provider: Provider,
        budget_seconds: u64,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let unsupported = CompletionError::UnsupportedProvider("mistral".to_string());
        assert_eq!(unsupported.to_string(), "Unsupported LLM provider: mistral");

        let missing = CompletionError::MissingCredential {
            provider: Provider::Gemini,
            env_var: "GEMINI_API_KEY",
        };
        assert_eq!(
            missing.to_string(),
            "gemini API key not configured. Please set the GEMINI_API_KEY environment variable."
        );

        let empty = CompletionError::EmptyResponse {
            provider: Provider::Claude,
        };
        assert_eq!(empty.to_string(), "claude API returned an empty response");

        let timeout = CompletionError::Timeout {
            provider: Provider::Ollama,
            budget_seconds: 60,
        };
        assert_eq!(
            timeout.to_string(),
            "ollama API request timed out after 60s"
        );
    }

    #[test]
    fn test_provider_error_includes_status_when_available() {
        let with_status = CompletionError::ProviderError {
            provider: Provider::Ollama,
            status: Some(500),
            message: "model not loaded".to_string(),
        };
        assert_eq!(
            with_status.to_string(),
            "ollama API error (HTTP 500): model not loaded"
        );

        let without_status = CompletionError::ProviderError {
            provider: Provider::Gemini,
            status: None,
            message: "connection refused".to_string(),
        };
        assert_eq!(
            without_status.to_string(),
            "gemini API error: connection refused"
        );
    }
}
