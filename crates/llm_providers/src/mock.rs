use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    errors::CompletionError,
    models::CompletionRequest,
    service::CompletionHandler,
};

/// Mock completion handler for testing and development.
///
/// Returns a canned result and records every request it sees, so route
/// tests can assert on the dispatched provider and prompt.
pub struct MockCompletionHandler {
    result: Result<String, CompletionError>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletionHandler {
    /// A handler that replies with the given text.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            result: Ok(text.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A handler that fails every request with the given error.
    pub fn failing(error: CompletionError) -> Self {
        Self {
            result: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

#[async_trait]
impl CompletionHandler for MockCompletionHandler {
    async fn generate(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        if request.prompt.trim().is_empty() {
            return Err(CompletionError::EmptyPrompt);
        }
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request);
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Provider;

    #[tokio::test]
    async fn test_replying_handler_records_requests() {
        let handler = MockCompletionHandler::replying("a fine itinerary");

        let result = handler
            .generate(CompletionRequest::new("plan a trip", Provider::Claude))
            .await
            .unwrap();

        assert_eq!(result, "a fine itinerary");
        let seen = handler.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].provider, Provider::Claude);
    }

    #[tokio::test]
    async fn test_failing_handler_returns_configured_error() {
        let handler = MockCompletionHandler::failing(CompletionError::Timeout {
            provider: Provider::Ollama,
            budget_seconds: 60,
        });

        let result = handler
            .generate(CompletionRequest::new("plan a trip", Provider::Ollama))
            .await;
        assert!(matches!(result, Err(CompletionError::Timeout { .. })));
    }
}
