use serde::{Deserialize, Serialize};

/// Request body for `POST /api/plan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelPlanRequest {
    pub destination: String,
    /// Trip length in days; must be at least 1.
    pub duration: i64,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub travel_style: Option<String>,
    /// Provider selector (`gemini`, `claude` or `ollama`, case-insensitive).
    /// Defaults to `gemini` when omitted.
    #[serde(default)]
    pub llm_provider: Option<String>,
}

impl TravelPlanRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.duration <= 0 {
            return Err("Duration must be greater than 0 days".to_string());
        }
        if self.destination.trim().is_empty() {
            return Err("Destination cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Request body for `POST /api/recommend`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub current_location: String,
    pub interests: Vec<String>,
    #[serde(default)]
    pub travel_history: Option<Vec<String>>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    /// Provider selector (`gemini`, `claude` or `ollama`, case-insensitive).
    /// Defaults to `gemini` when omitted.
    #[serde(default)]
    pub llm_provider: Option<String>,
}

impl RecommendationRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.interests.is_empty() {
            return Err("At least one interest must be provided".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub plan: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    pub r#type: String,
}

impl ErrorResponse {
    pub fn new(message: String, r#type: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message,
                r#type: r#type.into(),
            },
        }
    }
}
