//! Top-level error wrapper types.

use crate::{
    ExtractError, FetchError, ModelsError, PipelineError, TemplateError, ValidationError,
};

/// The foundation error enum aggregating every Lectern error domain.
///
/// # Examples
///
/// ```
/// use lectern_error::{LecternError, FetchError, FetchErrorKind};
///
/// let fetch_err = FetchError::new(FetchErrorKind::InvalidUrl("not-a-url".to_string()));
/// let err: LecternError = fetch_err.into();
/// assert!(format!("{}", err).contains("Fetch Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LecternErrorKind {
    /// Request validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Document extraction error
    #[from(ExtractError)]
    Extract(ExtractError),
    /// Web resource fetch error
    #[from(FetchError)]
    Fetch(FetchError),
    /// Prompt template error
    #[from(TemplateError)]
    Template(TemplateError),
    /// Generation provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Pipeline orchestration error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Lectern error with kind discrimination.
///
/// # Examples
///
/// ```
/// use lectern_error::{LecternResult, TemplateError, TemplateErrorKind};
///
/// fn might_fail() -> LecternResult<()> {
///     Err(TemplateError::new(TemplateErrorKind::NotFound("x".to_string())))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Lectern Error: {}", _0)]
pub struct LecternError(Box<LecternErrorKind>);

impl LecternError {
    /// Create a new error from a kind.
    pub fn new(kind: LecternErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LecternErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to LecternErrorKind
impl<T> From<T> for LecternError
where
    T: Into<LecternErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Lectern operations.
pub type LecternResult<T> = std::result::Result<T, LecternError>;
