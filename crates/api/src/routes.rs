use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use llm_providers::{CompletionError, CompletionHandler, CompletionRequest, Provider};
use std::sync::Arc;

use crate::{models::*, prompts};

/// Application state: the completion handler behind every route.
pub type AppState = Arc<dyn CompletionHandler>;

fn map_completion_error_to_status(error: &CompletionError) -> StatusCode {
    match error {
        CompletionError::UnsupportedProvider(_) | CompletionError::EmptyPrompt => {
            StatusCode::BAD_REQUEST
        }
        CompletionError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        CompletionError::MissingCredential { .. }
        | CompletionError::MalformedResponse { .. }
        | CompletionError::EmptyResponse { .. }
        | CompletionError::ProviderError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_type(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "invalid_request_error",
        StatusCode::GATEWAY_TIMEOUT => "timeout_error",
        _ => "provider_error",
    }
}

fn completion_error_response(error: &CompletionError) -> Response {
    let status = map_completion_error_to_status(error);
    if status.is_server_error() {
        tracing::error!(error = %error, "Completion request failed");
    }
    (
        status,
        ResponseJson(ErrorResponse::new(error.to_string(), error_type(status))),
    )
        .into_response()
}

fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        ResponseJson(ErrorResponse::new(message, "invalid_request_error")),
    )
        .into_response()
}

/// Resolve the optional selector into a provider. The default when the
/// selector is omitted is explicit and documented: Gemini.
fn selected_provider(selector: Option<&str>) -> Result<Provider, CompletionError> {
    match selector {
        Some(selector) => selector.parse(),
        None => Ok(Provider::default()),
    }
}

pub async fn root() -> ResponseJson<StatusResponse> {
    ResponseJson(StatusResponse {
        message: "Travel Planner API is running".to_string(),
    })
}

pub async fn create_travel_plan(
    State(handler): State<AppState>,
    Json(request): Json<TravelPlanRequest>,
) -> Response {
    if let Err(error) = request.validate() {
        return bad_request(error);
    }

    let provider = match selected_provider(request.llm_provider.as_deref()) {
        Ok(provider) => provider,
        Err(error) => return completion_error_response(&error),
    };

    let prompt = prompts::travel_plan_prompt(&request);
    match handler
        .generate(CompletionRequest::new(prompt, provider))
        .await
    {
        Ok(plan) => (StatusCode::OK, ResponseJson(PlanResponse { plan })).into_response(),
        Err(error) => completion_error_response(&error),
    }
}

pub async fn get_destination_recommendations(
    State(handler): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    if let Err(error) = request.validate() {
        return bad_request(error);
    }

    let provider = match selected_provider(request.llm_provider.as_deref()) {
        Ok(provider) => provider,
        Err(error) => return completion_error_response(&error),
    };

    let prompt = prompts::recommendations_prompt(&request);
    match handler
        .generate(CompletionRequest::new(prompt, provider))
        .await
    {
        Ok(recommendations) => (
            StatusCode::OK,
            ResponseJson(RecommendationsResponse { recommendations }),
        )
            .into_response(),
        Err(error) => completion_error_response(&error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_covers_every_error_class() {
        let cases = [
            (
                CompletionError::UnsupportedProvider("gpt-4".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (CompletionError::EmptyPrompt, StatusCode::BAD_REQUEST),
            (
                CompletionError::MissingCredential {
                    provider: Provider::Gemini,
                    env_var: "GEMINI_API_KEY",
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CompletionError::MalformedResponse {
                    provider: Provider::Ollama,
                    detail: "missing response field".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CompletionError::EmptyResponse {
                    provider: Provider::Claude,
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CompletionError::ProviderError {
                    provider: Provider::Ollama,
                    status: Some(500),
                    message: "upstream failed".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CompletionError::Timeout {
                    provider: Provider::Ollama,
                    budget_seconds: 60,
                },
                StatusCode::GATEWAY_TIMEOUT,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(map_completion_error_to_status(&error), expected, "{error}");
        }
    }

    #[test]
    fn test_error_type_labels() {
        assert_eq!(error_type(StatusCode::BAD_REQUEST), "invalid_request_error");
        assert_eq!(error_type(StatusCode::GATEWAY_TIMEOUT), "timeout_error");
        assert_eq!(
            error_type(StatusCode::INTERNAL_SERVER_ERROR),
            "provider_error"
        );
    }

    #[test]
    fn test_selected_provider_defaults_to_gemini() {
        assert_eq!(selected_provider(None).unwrap(), Provider::Gemini);
        assert_eq!(selected_provider(Some("OLLAMA")).unwrap(), Provider::Ollama);
        assert!(selected_provider(Some("bard")).is_err());
    }
}
