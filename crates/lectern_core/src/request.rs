//! The per-invocation analysis request aggregate.

use crate::FetchedResource;
use lectern_error::{ValidationError, ValidationErrorKind, ValidationResult};
use serde::{Deserialize, Serialize};

/// Labeled section marker for deck text inside `combined_text`.
const DECK_LABEL: &str = "SLIDE DECK CONTENT:";

/// Labeled section marker for transcript text inside `combined_text`.
const TRANSCRIPT_LABEL: &str = "PRESENTATION TRANSCRIPT:";

/// Concatenate extracted deck and transcript text into the combined
/// content block handed to the prompt engine.
///
/// Order is deck-then-transcript, never reordered; a missing or empty
/// source contributes no section rather than an empty one.
///
/// # Examples
///
/// ```
/// use lectern_core::combine_sources;
///
/// let combined = combine_sources(Some("slide text"), Some("spoken text"));
/// let deck_at = combined.find("SLIDE DECK CONTENT").unwrap();
/// let transcript_at = combined.find("PRESENTATION TRANSCRIPT").unwrap();
/// assert!(deck_at < transcript_at);
///
/// assert_eq!(combine_sources(None, None), "");
/// ```
pub fn combine_sources(deck: Option<&str>, transcript: Option<&str>) -> String {
    let mut sections = Vec::new();
    if let Some(deck) = deck {
        if !deck.trim().is_empty() {
            sections.push(format!("{}\n{}", DECK_LABEL, deck));
        }
    }
    if let Some(transcript) = transcript {
        if !transcript.trim().is_empty() {
            sections.push(format!("{}\n{}", TRANSCRIPT_LABEL, transcript));
        }
    }
    sections.join("\n\n")
}

/// Aggregate of everything one analysis invocation needs.
///
/// Built per invocation and never persisted.
///
/// # Examples
///
/// ```
/// use lectern_core::AnalysisRequest;
///
/// let request = AnalysisRequest::builder()
///     .title("Intro to X")
///     .presenters("A, B")
///     .user_notes("great talk")
///     .combined_text("SLIDE DECK CONTENT:\n...")
///     .template_id("presales_engineer")
///     .build()
///     .unwrap();
///
/// assert!(request.validate().is_ok());
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
pub struct AnalysisRequest {
    /// Presentation title
    title: String,
    /// Presenter or author names
    presenters: String,
    /// The attendee's personal notes
    user_notes: String,
    /// Labeled deck/transcript text, possibly empty
    #[builder(default)]
    combined_text: String,
    /// Optional GitHub repository URL, included verbatim in the prompt
    #[builder(default)]
    github_url: Option<String>,
    /// Successfully fetched web resources, in input order
    #[builder(default)]
    resources: Vec<FetchedResource>,
    /// Prompt template identifier
    template_id: String,
}

impl AnalysisRequest {
    /// Builder for an analysis request.
    pub fn builder() -> AnalysisRequestBuilder {
        AnalysisRequestBuilder::default()
    }

    /// True when the combined deck/transcript text carries visible content.
    pub fn has_slides(&self) -> bool {
        !self.combined_text.trim().is_empty()
    }

    /// Check the request invariants before generation is attempted.
    ///
    /// Title, presenters, and notes must be non-empty after trimming,
    /// and at least one of {combined text, resources} must be present.
    pub fn validate(&self) -> ValidationResult<()> {
        for (value, name) in [
            (&self.title, "title"),
            (&self.presenters, "presenters"),
            (&self.user_notes, "notes"),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::new(ValidationErrorKind::MissingField(
                    name.to_string(),
                )));
            }
        }
        if !self.has_slides() && self.resources.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::NoContent));
        }
        Ok(())
    }
}
