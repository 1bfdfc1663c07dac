//! Gemini `generateContent` data transfer objects.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One text part inside a content entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Part {
    /// Part text
    #[serde(default)]
    text: String,
}

impl Part {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A content entry holding ordered parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Content {
    /// Ordered parts
    #[serde(default)]
    parts: Vec<Part>,
}

/// Sampling configuration for a generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Maximum tokens to generate
    pub max_output_tokens: u32,
    /// Temperature for sampling
    pub temperature: f32,
}

/// `generateContent` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Prompt contents
    pub contents: Vec<Content>,
    /// Sampling configuration
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Single-prompt request with the given sampling configuration.
    pub fn from_prompt(prompt: impl Into<String>, max_output_tokens: u32, temperature: f32) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part::new(prompt)],
            }],
            generation_config: GenerationConfig {
                max_output_tokens,
                temperature,
            },
        }
    }
}

/// One candidate in a `generateContent` response.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct Candidate {
    /// Candidate content
    #[serde(default)]
    content: Option<Content>,
}

/// `generateContent` response body.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct GenerateContentResponse {
    /// Generation candidates
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content().as_ref())
            .map(|content| {
                content
                    .parts()
                    .iter()
                    .map(|part| part.text().as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}
