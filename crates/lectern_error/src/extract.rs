//! Document extraction error types.

/// Specific error conditions for content extraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExtractErrorKind {
    /// PDF could not be parsed
    #[display("Failed to parse PDF: {}", _0)]
    Pdf(String),

    /// Slide deck archive or XML could not be parsed
    #[display("Failed to parse slide deck: {}", _0)]
    Slides(String),

    /// Transcript bytes were not valid text
    #[display("Failed to read transcript: {}", _0)]
    Transcript(String),

    /// Extension outside the supported set
    #[display("Unsupported file type: {}", _0)]
    UnsupportedFormat(String),

    /// A remote source reached the extractor without being downloaded
    #[display("Remote source must be downloaded before extraction: {}", _0)]
    RemoteUnresolved(String),
}

/// Extraction error with source location tracking.
///
/// Extraction failures are recoverable: the triggering source is
/// discarded and the caller is told which source failed.
///
/// # Examples
///
/// ```
/// use lectern_error::{ExtractError, ExtractErrorKind};
///
/// let err = ExtractError::new(ExtractErrorKind::UnsupportedFormat("docx".to_string()));
/// assert!(format!("{}", err).contains("docx"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extraction Error: {} at {}:{}", kind, file, line)]
pub struct ExtractError {
    /// The specific error kind
    pub kind: ExtractErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ExtractError {
    /// Create a new extraction error.
    #[track_caller]
    pub fn new(kind: ExtractErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
