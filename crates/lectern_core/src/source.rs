//! Content source variants supplied by the caller.

use serde::{Deserialize, Serialize};

/// File extensions accepted for slide decks.
pub const DECK_EXTENSIONS: &[&str] = &["pdf", "pptx", "ppt"];

/// File extensions accepted for transcripts.
pub const TRANSCRIPT_EXTENSIONS: &[&str] = &["txt", "vtt"];

/// Role a document plays in the analysis, classified by extension.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum DocumentKind {
    /// Slide-based document (PDF or slide-presentation file)
    Deck,
    /// Plain-text or timed-caption record of spoken content
    Transcript,
}

impl DocumentKind {
    /// Classify a file extension, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use lectern_core::DocumentKind;
    ///
    /// assert_eq!(DocumentKind::from_extension("PDF"), Some(DocumentKind::Deck));
    /// assert_eq!(DocumentKind::from_extension("vtt"), Some(DocumentKind::Transcript));
    /// assert_eq!(DocumentKind::from_extension("docx"), None);
    /// ```
    pub fn from_extension(extension: &str) -> Option<Self> {
        let ext = extension.to_ascii_lowercase();
        if DECK_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Deck)
        } else if TRANSCRIPT_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Transcript)
        } else {
            None
        }
    }
}

/// A single raw content source supplied with an analysis request.
///
/// Immutable once constructed; its lifetime is a single request.
///
/// # Examples
///
/// ```
/// use lectern_core::ContentSource;
///
/// let deck = ContentSource::Deck {
///     bytes: vec![0x25, 0x50, 0x44, 0x46],
///     extension: "pdf".to_string(),
/// };
/// assert_eq!(deck.extension(), Some("pdf"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Raw slide-deck bytes with a declared extension
    Deck {
        /// File contents
        bytes: Vec<u8>,
        /// Declared extension (e.g. "pdf", "pptx")
        extension: String,
    },
    /// Raw transcript bytes with a declared extension
    Transcript {
        /// File contents
        bytes: Vec<u8>,
        /// Declared extension (e.g. "txt", "vtt")
        extension: String,
    },
    /// A remote document to download and classify by extension
    RemoteUrl {
        /// Location of the document
        uri: String,
    },
}

impl ContentSource {
    /// The declared extension, lower-cased, when the source carries bytes.
    pub fn extension(&self) -> Option<&str> {
        match self {
            Self::Deck { extension, .. } | Self::Transcript { extension, .. } => {
                Some(extension.as_str())
            }
            Self::RemoteUrl { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_all_supported_extensions() {
        for ext in DECK_EXTENSIONS {
            assert_eq!(DocumentKind::from_extension(ext), Some(DocumentKind::Deck));
        }
        for ext in TRANSCRIPT_EXTENSIONS {
            assert_eq!(
                DocumentKind::from_extension(ext),
                Some(DocumentKind::Transcript)
            );
        }
    }

    #[test]
    fn rejects_unknown_extension() {
        assert_eq!(DocumentKind::from_extension("exe"), None);
        assert_eq!(DocumentKind::from_extension(""), None);
    }
}
