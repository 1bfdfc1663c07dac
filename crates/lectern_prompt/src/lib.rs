//! Analysis prompt templates for Lectern.
//!
//! A [`PromptTemplate`] describes one analysis perspective as JSON: a
//! role, a task description with substitution markers, and an ordered
//! list of response sections. [`TemplateStore`] loads templates from a
//! directory by id, and [`render`] assembles a template and an
//! [`lectern_core::AnalysisRequest`] into the final instruction string.
//! Rendering is deterministic and makes no model calls.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod render;
mod store;
mod template;

pub use render::render;
pub use store::{TemplateStore, TemplateSummary, DEFAULT_TEMPLATE_ID};
pub use template::{PromptSection, PromptSubsection, PromptTemplate};
