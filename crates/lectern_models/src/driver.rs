//! The driver seam every provider binding implements.

use crate::{GenerationOutput, GenerationRequest};
use async_trait::async_trait;
use lectern_error::ModelsResult;

/// Core trait implemented by all generation drivers.
///
/// Drivers are interchangeable at the call site: after construction
/// the caller never branches on which provider sits behind the trait.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Generate text for the common request triple.
    async fn generate(&self, request: &GenerationRequest) -> ModelsResult<GenerationOutput>;

    /// Provider name (e.g., "anthropic", "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-sonnet-4-20250514").
    fn model_name(&self) -> &str;
}
