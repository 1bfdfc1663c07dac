//! Provider-agnostic text generation for Lectern.
//!
//! A [`ProviderClient`] is constructed once from a [`Provider`]
//! identifier (usually the `AI_PROVIDER` environment variable) and
//! then behaves identically regardless of which provider backs it:
//! callers hand it a [`GenerationRequest`] and receive a
//! [`GenerationOutput`] or a `ModelsError`. Credential problems and
//! unrecognized provider names surface at construction, never at call
//! time.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod client;
mod driver;
mod google;
mod ollama;
mod openai_compat;
mod provider;
mod request;

pub use anthropic::AnthropicDriver;
pub use client::ProviderClient;
pub use driver::GenerationDriver;
pub use google::GoogleDriver;
pub use ollama::OllamaDriver;
pub use openai_compat::OpenAiCompatDriver;
pub use provider::Provider;
pub use request::{
    GenerationOutput, GenerationRequest, GenerationRequestBuilder, DEFAULT_MAX_TOKENS,
    DEFAULT_TEMPERATURE,
};
