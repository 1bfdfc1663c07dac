//! The terminal analysis result value.

use serde::{Deserialize, Serialize};

/// Normalized outcome of one generation call.
///
/// `text` is opaque prose handed downstream for rendering; Lectern does
/// not parse or structure the model's output. Per-call transport errors
/// land here as `success == false` with an attributable message so the
/// caller can render a user-facing failure without crashing the request.
///
/// # Examples
///
/// ```
/// use lectern_core::AnalysisResult;
///
/// let ok = AnalysisResult::completed("## Summary...", "anthropic", "claude-sonnet-4-20250514");
/// assert!(ok.success());
///
/// let failed = AnalysisResult::failed("API error 529: overloaded");
/// assert!(!failed.success());
/// assert!(failed.error().contains("529"));
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct AnalysisResult {
    /// Whether generation produced text
    #[getter(skip)]
    success: bool,
    /// The model's response, empty on failure
    text: String,
    /// Provider that served the request, empty on pre-dispatch failure
    provider: String,
    /// Model identifier used, empty on pre-dispatch failure
    model: String,
    /// Attributable failure message, empty on success
    error: String,
}

impl AnalysisResult {
    /// A successful generation outcome.
    pub fn completed(
        text: impl Into<String>,
        provider: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            text: text.into(),
            provider: provider.into(),
            model: model.into(),
            error: String::new(),
        }
    }

    /// A failed generation outcome with an attributable message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            text: String::new(),
            provider: String::new(),
            model: String::new(),
            error: error.into(),
        }
    }

    /// Whether generation produced text.
    pub fn success(&self) -> bool {
        self.success
    }
}
