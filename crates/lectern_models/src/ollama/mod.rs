//! Local Ollama binding.

mod client;
mod dto;

pub use client::OllamaDriver;
pub(crate) use dto::{OllamaGenerateRequest, OllamaGenerateResponse};
