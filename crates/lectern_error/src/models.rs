//! Generation provider errors.

/// Error conditions shared by all provider bindings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Required credential variable is absent from the environment
    #[display("{} not found in environment variables", _0)]
    MissingCredential(&'static str),

    /// Request could not be sent
    #[display("Request failed: {}", _0)]
    Http(String),

    /// Provider API returned a non-success status
    #[display("API error {}: {}", status, message)]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Provider response could not be deserialized
    #[display("Failed to parse response: {}", _0)]
    Parse(String),

    /// Response contained no generated text
    #[display("Response contained no text output")]
    EmptyResponse,
}

/// Model provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// Error raised by a specific provider binding
    #[display("{}: {}", provider, kind)]
    Provider {
        /// Provider identifier ("anthropic", "openai", ...)
        provider: &'static str,
        /// The underlying condition
        kind: ProviderErrorKind,
    },

    /// Provider identifier outside the supported set
    #[display("Unsupported AI provider: {}. Valid providers are: anthropic, openai, google, ollama, xai", _0)]
    UnsupportedProvider(String),

    /// No provider identifier was configured at all
    #[display("AI_PROVIDER environment variable is required. Please set it to one of: anthropic, openai, google, ollama, xai")]
    ProviderNotConfigured,

    /// Builder error when constructing requests
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Model provider error with location tracking.
///
/// Credential and provider-selection errors are fatal configuration
/// errors raised at construction; per-call transport errors are caught
/// by the pipeline and reported back as a structured failure.
///
/// # Examples
///
/// ```
/// use lectern_error::{ModelsError, ModelsErrorKind};
///
/// let err = ModelsError::new(ModelsErrorKind::UnsupportedProvider("cohere".to_string()));
/// assert!(format!("{}", err).contains("anthropic, openai, google, ollama, xai"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Create a provider-bound error.
    #[track_caller]
    pub fn provider(provider: &'static str, kind: ProviderErrorKind) -> Self {
        Self::new(ModelsErrorKind::Provider { provider, kind })
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
