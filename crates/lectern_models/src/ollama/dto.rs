//! Ollama `/api/generate` data transfer objects.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Sampling options for an Ollama generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OllamaOptions {
    /// Maximum tokens to generate
    pub num_predict: u32,
    /// Temperature for sampling
    pub temperature: f32,
}

/// `/api/generate` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaGenerateRequest {
    /// Model identifier
    pub model: String,
    /// Prompt text
    pub prompt: String,
    /// Disable streaming so the response arrives as one JSON object
    pub stream: bool,
    /// Sampling options
    pub options: OllamaOptions,
}

impl OllamaGenerateRequest {
    /// Single-prompt request with the given sampling options.
    pub fn from_prompt(
        model: impl Into<String>,
        prompt: impl Into<String>,
        num_predict: u32,
        temperature: f32,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            options: OllamaOptions {
                num_predict,
                temperature,
            },
        }
    }
}

/// `/api/generate` response body.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct OllamaGenerateResponse {
    /// Generated text
    #[serde(default)]
    response: String,
}
