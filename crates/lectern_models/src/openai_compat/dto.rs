//! Chat-completions data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Chat message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatMessage {
    /// Message role ("user", "assistant", "system")
    role: String,
    /// Message content
    #[serde(default)]
    content: String,
}

impl ChatMessage {
    /// Creates a new builder for `ChatMessage`.
    pub fn builder() -> ChatMessageBuilder {
        ChatMessageBuilder::default()
    }
}

/// Chat-completions request parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Temperature for sampling
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Conversation messages
    messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// Creates a new builder for `ChatCompletionRequest`.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// One completion choice in a response.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct ChatChoice {
    /// The generated message
    message: ChatMessage,
}

/// Chat-completions response.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct ChatCompletionResponse {
    /// Completion choices
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message().content().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_exposes_first_choice_text() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "answer"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_text(), Some("answer"));
    }

    #[test]
    fn empty_choices_yield_none() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.first_text().is_none());
    }
}
