//! Normalized text produced by the content extractor.

use serde::{Deserialize, Serialize};

/// Normalized text extracted from exactly one [`crate::ContentSource`].
///
/// Never mutated after creation. `unit_count` counts pages for PDFs,
/// slides for decks, and lines for transcripts.
///
/// # Examples
///
/// ```
/// use lectern_core::ExtractedText;
///
/// let extracted = ExtractedText::builder()
///     .text("--- Page 1 ---\nHello".to_string())
///     .unit_count(1usize)
///     .build()
///     .unwrap();
///
/// assert_eq!(*extracted.unit_count(), 1);
/// assert!(!extracted.is_empty());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ExtractedText {
    /// The normalized text content
    text: String,
    /// Pages, slides, or lines in the source document
    unit_count: usize,
    /// Per-slide speaker notes, kept separate from the main text.
    /// Currently unused downstream; preserved for forward compatibility.
    #[builder(default)]
    notes: String,
    /// Whether any page contained embedded images (diagnostic only)
    #[builder(default)]
    has_images: bool,
}

impl ExtractedText {
    /// Builder for an extracted-text value.
    pub fn builder() -> ExtractedTextBuilder {
        ExtractedTextBuilder::default()
    }

    /// True when the source parsed but yielded no visible text.
    ///
    /// Distinct from a parse failure: an image-only or structurally
    /// empty document lands here and the caller surfaces a specific
    /// message instead of silently proceeding.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_flagged() {
        let extracted = ExtractedText::builder()
            .text("   \n\t")
            .unit_count(3usize)
            .build()
            .unwrap();
        assert!(extracted.is_empty());
        // Structural emptiness still reports its unit count.
        assert_eq!(*extracted.unit_count(), 3);
    }

    #[test]
    fn defaults_leave_notes_empty() {
        let extracted = ExtractedText::builder()
            .text("body")
            .unit_count(1usize)
            .build()
            .unwrap();
        assert!(extracted.notes().is_empty());
        assert!(!extracted.has_images());
    }
}
