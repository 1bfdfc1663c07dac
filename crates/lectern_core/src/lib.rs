//! Core data types for the Lectern presentation analysis pipeline.
//!
//! This crate provides the foundation data types passed between the
//! extractor, fetcher, prompt engine, and generation client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod metadata;
mod request;
mod resource;
mod result;
mod source;
mod text;

pub use metadata::{OutputMetadata, OutputMetadataBuilder};
pub use request::{combine_sources, AnalysisRequest, AnalysisRequestBuilder};
pub use resource::{FetchedResource, MAX_RESOURCE_CHARS};
pub use result::AnalysisResult;
pub use source::{ContentSource, DocumentKind, DECK_EXTENSIONS, TRANSCRIPT_EXTENSIONS};
pub use text::{ExtractedText, ExtractedTextBuilder};
