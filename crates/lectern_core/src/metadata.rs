//! Metadata handed to the output renderer alongside the analysis text.

use serde::{Deserialize, Serialize};

/// Request metadata persisted with the rendered analysis.
///
/// # Examples
///
/// ```
/// use lectern_core::OutputMetadata;
///
/// let meta = OutputMetadata::builder()
///     .title("Intro to X")
///     .presenters("A, B")
///     .date("August 28, 2026")
///     .time("09:15 AM")
///     .build()
///     .unwrap();
///
/// assert!(meta.github_url().is_none());
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
pub struct OutputMetadata {
    /// Presentation title
    title: String,
    /// Presenter or author names
    presenters: String,
    /// Human-readable date of the analysis
    date: String,
    /// Human-readable time of the analysis
    time: String,
    /// Optional GitHub repository URL
    #[builder(default)]
    github_url: Option<String>,
}

impl OutputMetadata {
    /// Builder for output metadata.
    pub fn builder() -> OutputMetadataBuilder {
        OutputMetadataBuilder::default()
    }
}
