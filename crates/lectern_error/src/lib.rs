//! Error types for the Lectern library.
//!
//! This crate provides the foundation error types used throughout the
//! Lectern ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean
//! error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use lectern_error::{LecternResult, ValidationError, ValidationErrorKind};
//!
//! fn check_title(title: &str) -> LecternResult<()> {
//!     if title.trim().is_empty() {
//!         Err(ValidationError::new(ValidationErrorKind::MissingField(
//!             "title".to_string(),
//!         )))?;
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_title("  ").is_err());
//! assert!(check_title("Intro to X").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod extract;
mod fetch;
mod models;
mod pipeline;
mod template;
mod validation;

pub use error::{LecternError, LecternErrorKind, LecternResult};
pub use extract::{ExtractError, ExtractErrorKind, ExtractResult};
pub use fetch::{FetchError, FetchErrorKind, FetchResult};
pub use models::{ModelsError, ModelsErrorKind, ModelsResult, ProviderErrorKind};
pub use pipeline::{PipelineError, PipelineErrorKind, PipelineResult};
pub use template::{TemplateError, TemplateErrorKind, TemplateResult};
pub use validation::{ValidationError, ValidationErrorKind, ValidationResult};
