use crate::ollama::{OllamaGenerateRequest, OllamaGenerateResponse};
use crate::{GenerationDriver, GenerationOutput, GenerationRequest};
use async_trait::async_trait;
use lectern_error::{ModelsError, ModelsResult, ProviderErrorKind};
use reqwest::Client;
use tracing::{debug, error, instrument};

const BASE_URL_VAR: &str = "OLLAMA_BASE_URL";
const MODEL_VAR: &str = "OLLAMA_MODEL";
const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama3.1";

/// Ollama local-model driver. Requires no credential.
#[derive(Debug, Clone)]
pub struct OllamaDriver {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaDriver {
    /// Creates a new Ollama driver.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let base_url = base_url.into();
        debug!(base_url = %base_url, "Creating new Ollama driver");
        Self {
            client: Client::new(),
            base_url,
            model: model.into(),
        }
    }

    /// Build a driver from `OLLAMA_BASE_URL` and `OLLAMA_MODEL`.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(base_url, model)
    }

    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn send(&self, request: &OllamaGenerateRequest) -> ModelsResult<OllamaGenerateResponse> {
        debug!("Sending request to Ollama");

        let url = format!("{}/api/generate", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Ollama");
                ModelsError::provider("ollama", ProviderErrorKind::Http(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Ollama returned error");
            return Err(ModelsError::provider(
                "ollama",
                ProviderErrorKind::ApiError {
                    status: status.as_u16(),
                    message: body,
                },
            ));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Ollama response");
            ModelsError::provider("ollama", ProviderErrorKind::Parse(e.to_string()))
        })
    }
}

#[async_trait]
impl GenerationDriver for OllamaDriver {
    #[instrument(skip(self, request))]
    async fn generate(&self, request: &GenerationRequest) -> ModelsResult<GenerationOutput> {
        let ollama_request = OllamaGenerateRequest::from_prompt(
            &self.model,
            request.prompt().clone(),
            *request.max_tokens(),
            *request.temperature(),
        );
        let response = self.send(&ollama_request).await?;

        let text = response.response().clone();
        if text.is_empty() {
            return Err(ModelsError::provider(
                "ollama",
                ProviderErrorKind::EmptyResponse,
            ));
        }

        Ok(GenerationOutput::new(text, "ollama", &self.model))
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
