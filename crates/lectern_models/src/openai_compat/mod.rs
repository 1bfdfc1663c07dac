//! OpenAI chat-completions binding, shared by OpenAI and xAI.

mod client;
mod dto;

pub use client::OpenAiCompatDriver;
pub(crate) use dto::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
