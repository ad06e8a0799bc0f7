// Configuration Management
//
// This crate handles all configuration loading for the travel planner API.
// It provides:
// - Configuration structs for the server, LLM providers, and logging
// - Environment variable loading with defaults
//
// Configuration is read once at process start and never mutated afterwards;
// the resulting structs are passed by reference into the services that need
// them.

use thiserror::Error;

pub mod types;

// Re-export all configuration types
pub use types::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let error = ConfigError::InvalidValue {
            name: "SERVER_PORT",
            expected: "port number",
        };
        assert_eq!(error.to_string(), "SERVER_PORT must be a valid port number");
    }
}
