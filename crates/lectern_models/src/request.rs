//! The common generation request and output shapes.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Default response token budget for analysis calls.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Default sampling temperature for analysis calls.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// The provider-independent triple every binding maps onto its own
/// wire shape.
///
/// # Examples
///
/// ```
/// use lectern_models::GenerationRequest;
///
/// let request = GenerationRequest::builder()
///     .prompt("Summarize this talk.")
///     .build()
///     .unwrap();
/// assert_eq!(*request.max_tokens(), 4096);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Complete rendered prompt
    prompt: String,
    /// Maximum tokens in the response
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    max_tokens: u32,
    /// Sampling temperature
    #[builder(default = "DEFAULT_TEMPERATURE")]
    temperature: f32,
}

impl GenerationRequest {
    /// Creates a new builder for `GenerationRequest`.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

/// Text returned by a provider, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerationOutput {
    /// Generated text
    text: String,
    /// Provider identifier the call went through
    provider: String,
    /// Model identifier that produced the text
    model: String,
}

impl GenerationOutput {
    /// Tag generated text with its origin.
    pub fn new(
        text: impl Into<String>,
        provider: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            provider: provider.into(),
            model: model.into(),
        }
    }
}
