//! Web resource fetch error types.

/// Specific error conditions for URL fetching.
///
/// Fetch errors are recoverable per-URL: the batch records the failed
/// URL and continues with the rest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FetchErrorKind {
    /// Request exceeded its timeout
    #[display("Request timed out: {}", _0)]
    Timeout(String),

    /// Transport-level failure (DNS, connection, TLS)
    #[display("Failed to fetch {}: {}", url, message)]
    Transport {
        /// URL that failed
        url: String,
        /// Underlying error message
        message: String,
    },

    /// Server returned a non-success status
    #[display("HTTP {} from {}", status, url)]
    Http {
        /// Response status code
        status: u16,
        /// URL that failed
        url: String,
    },

    /// URL string could not be parsed
    #[display("Invalid URL: {}", _0)]
    InvalidUrl(String),

    /// Downloaded file extension outside the allowed set
    #[display("URL must point to a supported document type: {}", _0)]
    UnsupportedDocument(String),

    /// Writing the downloaded document to disk failed
    #[display("Failed to save downloaded file: {}", _0)]
    Io(String),
}

/// Fetch error with source location tracking.
///
/// # Examples
///
/// ```
/// use lectern_error::{FetchError, FetchErrorKind};
///
/// let err = FetchError::new(FetchErrorKind::Timeout("https://example.com".to_string()));
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Fetch Error: {} at {}:{}", kind, file, line)]
pub struct FetchError {
    /// The specific error kind
    pub kind: FetchErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl FetchError {
    /// Create a new fetch error.
    #[track_caller]
    pub fn new(kind: FetchErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
