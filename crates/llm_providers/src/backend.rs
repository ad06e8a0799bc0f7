//! Backend trait for provider adapter implementations
//!
//! Each adapter translates the dispatcher's uniform request into one
//! provider's wire format, issues a single outbound call, and validates the
//! response into either a plain completion text or a classified error.

use async_trait::async_trait;

use crate::{
    errors::CompletionError,
    models::{CompletionRequest, Provider},
};

/// Internal adapter trait, one implementation per [`Provider`] variant.
///
/// An adapter performs exactly one outbound round trip per invocation. It
/// holds no cache and mutates no state; preconditions (such as a configured
/// credential) are checked before any network activity.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// The provider this adapter speaks for.
    fn provider(&self) -> Provider;

    /// Perform one completion call and return the generated text.
    async fn generate(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
