//! Google Gemini binding.

mod client;
mod dto;

pub use client::GoogleDriver;
pub(crate) use dto::{GenerateContentRequest, GenerateContentResponse};
