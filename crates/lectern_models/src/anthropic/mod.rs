//! Anthropic Claude binding.

mod client;
mod dto;

pub use client::AnthropicDriver;
pub(crate) use dto::{AnthropicMessage, AnthropicRequest, AnthropicResponse};
