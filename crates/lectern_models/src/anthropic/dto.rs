//! Anthropic Messages API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Anthropic message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicMessage {
    /// Message role ("user" or "assistant")
    role: String,
    /// Message content
    content: String,
}

impl AnthropicMessage {
    /// Creates a new builder for `AnthropicMessage`.
    pub fn builder() -> AnthropicMessageBuilder {
        AnthropicMessageBuilder::default()
    }
}

/// Anthropic Messages API request parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Temperature for sampling
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Conversation messages
    messages: Vec<AnthropicMessage>,
}

impl AnthropicRequest {
    /// Creates a new builder for `AnthropicRequest`.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// One content block in an Anthropic response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicContentBlock {
    /// Block text
    #[serde(default)]
    text: String,
}

/// Anthropic Messages API response.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct AnthropicResponse {
    /// Response identifier
    #[serde(default)]
    id: String,
    /// Generated content blocks
    #[serde(default)]
    content: Vec<AnthropicContentBlock>,
}

impl AnthropicResponse {
    /// Concatenated text across all content blocks.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(|block| block.text().as_str())
            .collect::<Vec<_>>()
            .join("")
    }
}
