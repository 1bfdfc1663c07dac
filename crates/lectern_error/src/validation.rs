//! Request validation error types.

/// Specific error conditions for request validation.
///
/// Validation errors are always recoverable and carry a user-facing
/// message; they are never logged as system faults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// A required field is empty after trimming
    #[display("Please fill in the required field: {}", _0)]
    MissingField(String),

    /// File extension outside the allowed set
    #[display("Invalid file type '{}'. Only PDF and PPTX decks and TXT/VTT transcripts are supported", _0)]
    DisallowedFileType(String),

    /// Request body could not be interpreted
    #[display("Malformed request: {}", _0)]
    MalformedRequest(String),

    /// Neither document content nor resource URLs were supplied
    #[display("Please provide either a slide deck, a transcript, or resource URLs to analyze")]
    NoContent,

    /// A document parsed but yielded no text
    #[display("No text could be extracted from {}. The file may be image-based (scanned slides) or empty", _0)]
    EmptyYield(String),
}

/// Validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use lectern_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::MissingField("notes".to_string()));
/// assert!(format!("{}", err).contains("notes"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at {}:{}", kind, file, line)]
pub struct ValidationError {
    /// The specific error kind
    pub kind: ValidationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
