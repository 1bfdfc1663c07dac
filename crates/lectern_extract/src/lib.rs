//! Document content extraction for Lectern.
//!
//! Converts a raw [`ContentSource`] (PDF, slide deck, plain-text or
//! caption transcript) into normalized text plus source metadata.
//!
//! # Examples
//!
//! ```
//! use lectern_core::ContentSource;
//! use lectern_extract::extract;
//!
//! let source = ContentSource::Transcript {
//!     bytes: b"hello world".to_vec(),
//!     extension: "txt".to_string(),
//! };
//! let extracted = extract(&source).unwrap();
//! assert_eq!(extracted.text(), "hello world");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod pdf;
mod slides;
mod transcript;

pub use transcript::clean_vtt;

use lectern_core::{ContentSource, ExtractedText};
use lectern_error::{ExtractError, ExtractErrorKind, ExtractResult};
use tracing::{debug, instrument};

/// Extract normalized text from exactly one content source.
///
/// Routes to the PDF, slide-deck, or transcript extractor by the
/// source's declared extension. Remote sources must be downloaded and
/// re-wrapped as byte sources before extraction.
///
/// # Errors
///
/// Returns [`ExtractError`] when the document cannot be parsed or the
/// extension is outside the supported set. An empty-but-valid document
/// is not an error: it yields empty text, and the caller decides how to
/// surface that.
#[instrument(skip(source), fields(extension = source.extension().unwrap_or("-")))]
pub fn extract(source: &ContentSource) -> ExtractResult<ExtractedText> {
    match source {
        ContentSource::Deck { bytes, extension } => {
            match extension.to_ascii_lowercase().as_str() {
                "pdf" => pdf::extract_pdf(bytes),
                "pptx" | "ppt" => slides::extract_pptx(bytes),
                other => Err(ExtractError::new(ExtractErrorKind::UnsupportedFormat(
                    other.to_string(),
                ))),
            }
        }
        ContentSource::Transcript { bytes, extension } => {
            let extracted = match extension.to_ascii_lowercase().as_str() {
                "txt" => transcript::extract_plain(bytes)?,
                "vtt" => transcript::extract_vtt(bytes)?,
                other => {
                    return Err(ExtractError::new(ExtractErrorKind::UnsupportedFormat(
                        other.to_string(),
                    )))
                }
            };
            debug!(lines = extracted.unit_count(), "Extracted transcript");
            Ok(extracted)
        }
        ContentSource::RemoteUrl { uri } => Err(ExtractError::new(
            ExtractErrorKind::RemoteUnresolved(uri.clone()),
        )),
    }
}
