//! LLM provider adapters and completion dispatch
//!
//! This crate routes free-text prompts to one of several LLM backends and
//! normalizes success and failure into a single contract: a plain text
//! completion on success, a classified [`CompletionError`] otherwise.
//!
//! # Design
//!
//! ```text
//! LlmService (implements CompletionHandler)
//!     └── adapters (one per Provider variant):
//!         ├── GeminiProvider   (hosted, credential required)
//!         ├── ClaudeProvider   (hosted, credential required)
//!         └── OllamaProvider   (self-hosted, no credential)
//! ```
//!
//! Each call is independent: validate the provider and preconditions, issue
//! exactly one outbound request, validate and return one response. There is
//! no retry loop, no fallback between providers, and no shared mutable
//! state; retries, if desired, are a caller concern.

pub mod backend;
pub mod claude;
pub mod errors;
pub mod gemini;
pub mod mock;
pub mod models;
pub mod ollama;
pub mod service;

// Re-export commonly used types for convenience
pub use backend::CompletionBackend;
pub use claude::ClaudeProvider;
pub use errors::CompletionError;
pub use gemini::GeminiProvider;
pub use mock::MockCompletionHandler;
pub use models::{CompletionRequest, Provider};
pub use ollama::OllamaProvider;
pub use service::{CompletionHandler, LlmService};
