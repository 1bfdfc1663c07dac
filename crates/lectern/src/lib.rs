//! Lectern - conference presentation analysis.
//!
//! Lectern turns a slide deck, a talk transcript, and a handful of
//! supporting URLs into a structured technical analysis written by a
//! configurable LLM provider.
//!
//! # Pipeline
//!
//! One request flows through four stages, strictly in order: extract
//! text from the supplied documents, fetch the supporting URLs, render
//! an analysis prompt from a JSON template, and call the configured
//! generation provider. Generation failures are folded into the
//! returned [`lectern_core::AnalysisResult`] rather than raised, so a
//! caller can always show the user an attributable message.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lectern::{AnalysisInput, Pipeline};
//! use lectern_models::ProviderClient;
//! use lectern_prompt::TemplateStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pipeline = Pipeline::new(
//!         TemplateStore::new("templates"),
//!         Arc::new(ProviderClient::from_env()?),
//!         "outputs",
//!     );
//!
//!     let input = AnalysisInput::builder()
//!         .title("Intro to X")
//!         .presenters("A. Speaker")
//!         .notes("great session on X")
//!         .deck(Some(lectern_core::ContentSource::Deck {
//!             bytes: std::fs::read("deck.pdf")?,
//!             extension: "pdf".to_string(),
//!         }))
//!         .build()?;
//!
//!     let outcome = pipeline.run(&input).await?;
//!     println!("{}", outcome.result().text());
//!     Ok(())
//! }
//! ```
//!
//! # Workspace
//!
//! Lectern is organized as a workspace with focused crates:
//!
//! - `lectern_error` - Error types
//! - `lectern_core` - Core data types (requests, results, sources)
//! - `lectern_extract` - PDF, slide deck, and transcript extraction
//! - `lectern_scrape` - Web resource fetching and document download
//! - `lectern_prompt` - Prompt templates and rendering
//! - `lectern_models` - LLM provider bindings
//!
//! This crate (`lectern`) holds the pipeline and the CLI.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod output;
mod pipeline;

pub use output::write_markdown;
pub use pipeline::{AnalysisInput, AnalysisInputBuilder, AnalysisOutcome, Pipeline};

pub use lectern_core::{AnalysisRequest, AnalysisResult, ContentSource, FetchedResource};
pub use lectern_error::{LecternError, LecternResult};
pub use lectern_models::{GenerationDriver, Provider, ProviderClient};
pub use lectern_prompt::{TemplateStore, DEFAULT_TEMPLATE_ID};
pub use lectern_scrape::WebFetcher;
