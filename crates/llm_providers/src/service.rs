use async_trait::async_trait;
use config::ProvidersConfig;

use crate::{
    backend::CompletionBackend,
    claude::ClaudeProvider,
    errors::CompletionError,
    gemini::GeminiProvider,
    models::{CompletionRequest, Provider},
    ollama::OllamaProvider,
};

/// The dispatcher-facing capability interface.
///
/// This is the seam the HTTP layer depends on; tests substitute
/// [`crate::mock::MockCompletionHandler`].
#[async_trait]
pub trait CompletionHandler: Send + Sync {
    /// Generate one completion for the request, or fail with a classified
    /// error.
    async fn generate(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}

/// The completion dispatcher.
///
/// Routes each request to exactly one provider adapter. Stateless per call:
/// no fan-out, no fallback between providers, no retry, no cache. Adapter
/// failures are surfaced unchanged.
pub struct LlmService {
    gemini: GeminiProvider,
    claude: ClaudeProvider,
    ollama: OllamaProvider,
}

impl LlmService {
    /// Build the dispatcher from provider settings loaded at startup.
    pub fn new(config: &ProvidersConfig) -> Self {
        Self {
            gemini: GeminiProvider::new(&config.gemini),
            claude: ClaudeProvider::new(&config.anthropic),
            ollama: OllamaProvider::new(&config.ollama),
        }
    }

    fn backend(&self, provider: Provider) -> &dyn CompletionBackend {
        match provider {
            Provider::Gemini => &self.gemini,
            Provider::Claude => &self.claude,
            Provider::Ollama => &self.ollama,
        }
    }
}

#[async_trait]
impl CompletionHandler for LlmService {
    async fn generate(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        if request.prompt.trim().is_empty() {
            return Err(CompletionError::EmptyPrompt);
        }

        tracing::debug!(provider = %request.provider, "Dispatching completion request");
        let result = self.backend(request.provider).generate(&request).await;

        if let Err(error) = &result {
            tracing::warn!(provider = %request.provider, error = %error, "Completion request failed");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> LlmService {
        LlmService::new(&ProvidersConfig::default())
    }

    #[tokio::test]
    async fn test_empty_prompt_is_rejected_before_dispatch() {
        let result = service()
            .generate(CompletionRequest::new("   ", Provider::Gemini))
            .await;
        assert!(matches!(result, Err(CompletionError::EmptyPrompt)));
    }

    #[tokio::test]
    async fn test_missing_gemini_credential_fails_without_network() {
        // Default config has no key configured; the adapter must refuse
        // before attempting the call.
        let result = service()
            .generate(CompletionRequest::new("plan a trip", Provider::Gemini))
            .await;
        match result {
            Err(CompletionError::MissingCredential { provider, env_var }) => {
                assert_eq!(provider, Provider::Gemini);
                assert_eq!(env_var, "GEMINI_API_KEY");
            }
            other => panic!("Expected MissingCredential, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_claude_credential_fails_without_network() {
        let result = service()
            .generate(CompletionRequest::new("plan a trip", Provider::Claude))
            .await;
        match result {
            Err(CompletionError::MissingCredential { provider, env_var }) => {
                assert_eq!(provider, Provider::Claude);
                assert_eq!(env_var, "ANTHROPIC_API_KEY");
            }
            other => panic!("Expected MissingCredential, got {other:?}"),
        }
    }
}
