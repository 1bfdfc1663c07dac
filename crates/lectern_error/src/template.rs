//! Prompt template error types.

/// Specific error conditions for template loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TemplateErrorKind {
    /// No template file matches the requested id
    #[display("Prompt template not found: {}", _0)]
    NotFound(String),

    /// Template file could not be read
    #[display("Failed to read template file: {}", _0)]
    FileRead(String),

    /// Template JSON could not be deserialized
    #[display("Failed to parse template JSON: {}", _0)]
    JsonParse(String),
}

/// Template error with source location tracking.
///
/// # Examples
///
/// ```
/// use lectern_error::{TemplateError, TemplateErrorKind};
///
/// let err = TemplateError::new(TemplateErrorKind::NotFound("presales_engineer".to_string()));
/// assert!(format!("{}", err).contains("presales_engineer"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at {}:{}", kind, file, line)]
pub struct TemplateError {
    /// The specific error kind
    pub kind: TemplateErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new template error.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
