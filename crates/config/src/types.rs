use std::{collections::HashMap, env};

use crate::ConfigError;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub providers: ProvidersConfig,
    pub logging: LoggingConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            providers: ProvidersConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "SERVER_PORT",
                    expected: "port number",
                })?,
        })
    }
}

/// Per-provider settings for the completion dispatcher.
///
/// Credentials are optional: a provider with no configured key is still
/// routable, and fails with a classified error only when selected.
#[derive(Debug, Clone, Default)]
pub struct ProvidersConfig {
    pub gemini: GeminiConfig,
    pub anthropic: AnthropicConfig,
    pub ollama: OllamaConfig,
}

impl ProvidersConfig {
    /// Load from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            gemini: GeminiConfig::from_env()?,
            anthropic: AnthropicConfig::from_env()?,
            ollama: OllamaConfig::from_env()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl GeminiConfig {
    /// Load from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: env::var("GEMINI_API_KEY").ok(),
            base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string()),
            timeout_seconds: hosted_timeout_seconds()?,
        })
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_seconds: 60,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl AnthropicConfig {
    /// Load from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: env::var("ANTHROPIC_API_KEY").ok(),
            base_url: env::var("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|_| "https://api.anthropic.com/v1".to_string()),
            timeout_seconds: hosted_timeout_seconds()?,
        })
    }
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.anthropic.com/v1".to_string(),
            timeout_seconds: 60,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub base_url: String,
    /// Model used when a request carries no override.
    pub default_model: String,
    /// Wait budget for the synchronous generate call.
    pub timeout_seconds: u64,
}

impl OllamaConfig {
    /// Load from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            default_model: env::var("DEFAULT_OLLAMA_MODEL").unwrap_or_else(|_| "llama2".to_string()),
            timeout_seconds: env::var("OLLAMA_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "OLLAMA_TIMEOUT_SECONDS",
                    expected: "number of seconds",
                })?,
        })
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            default_model: "llama2".to_string(),
            timeout_seconds: 60,
        }
    }
}

/// Shared wait budget for the hosted providers (Gemini, Claude).
fn hosted_timeout_seconds() -> Result<u64, ConfigError> {
    env::var("LLM_TIMEOUT_SECONDS")
        .unwrap_or_else(|_| "60".to_string())
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            name: "LLM_TIMEOUT_SECONDS",
            expected: "number of seconds",
        })
}

/// Logging Configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub modules: HashMap<String, String>,
}

impl LoggingConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        let mut modules = HashMap::new();

        // Load module-specific log levels
        if let Ok(level) = env::var("LOG_MODULE_API") {
            modules.insert("api".to_string(), level);
        }
        if let Ok(level) = env::var("LOG_MODULE_LLM_PROVIDERS") {
            modules.insert("llm_providers".to_string(), level);
        }

        Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            modules,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            modules: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_defaults() {
        let config = OllamaConfig::default();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.default_model, "llama2");
        assert_eq!(config.timeout_seconds, 60);
    }

    #[test]
    fn test_hosted_provider_defaults() {
        let gemini = GeminiConfig::default();
        assert!(gemini.api_key.is_none());
        assert_eq!(
            gemini.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );

        let anthropic = AnthropicConfig::default();
        assert!(anthropic.api_key.is_none());
        assert_eq!(anthropic.base_url, "https://api.anthropic.com/v1");
    }

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "pretty");
        assert!(config.modules.is_empty());
    }
}
