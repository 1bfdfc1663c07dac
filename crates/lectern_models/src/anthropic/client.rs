use crate::anthropic::{AnthropicMessage, AnthropicRequest, AnthropicResponse};
use crate::{GenerationDriver, GenerationOutput, GenerationRequest};
use async_trait::async_trait;
use lectern_error::{ModelsError, ModelsErrorKind, ModelsResult, ProviderErrorKind};
use reqwest::Client;
use tracing::{debug, error, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
const MODEL_VAR: &str = "ANTHROPIC_MODEL";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Anthropic Messages API driver.
#[derive(Debug, Clone)]
pub struct AnthropicDriver {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicDriver {
    /// Creates a new Anthropic driver.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new Anthropic driver");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build a driver from `ANTHROPIC_API_KEY` and `ANTHROPIC_MODEL`.
    pub fn from_env() -> ModelsResult<Self> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            ModelsError::provider("anthropic", ProviderErrorKind::MissingCredential(API_KEY_VAR))
        })?;
        let model = std::env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, model))
    }

    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn send(&self, request: &AnthropicRequest) -> ModelsResult<AnthropicResponse> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                ModelsError::provider("anthropic", ProviderErrorKind::Http(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(ModelsError::provider(
                "anthropic",
                ProviderErrorKind::ApiError {
                    status: status.as_u16(),
                    message: body,
                },
            ));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            ModelsError::provider("anthropic", ProviderErrorKind::Parse(e.to_string()))
        })
    }

    fn convert_request(&self, request: &GenerationRequest) -> ModelsResult<AnthropicRequest> {
        let message = AnthropicMessage::builder()
            .role("user")
            .content(request.prompt().clone())
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))?;

        AnthropicRequest::builder()
            .model(&self.model)
            .max_tokens(*request.max_tokens())
            .temperature(Some(*request.temperature()))
            .messages(vec![message])
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))
    }
}

#[async_trait]
impl GenerationDriver for AnthropicDriver {
    #[instrument(skip(self, request))]
    async fn generate(&self, request: &GenerationRequest) -> ModelsResult<GenerationOutput> {
        let anthropic_request = self.convert_request(request)?;
        let response = self.send(&anthropic_request).await?;

        let text = response.text();
        if text.is_empty() {
            return Err(ModelsError::provider(
                "anthropic",
                ProviderErrorKind::EmptyResponse,
            ));
        }

        debug!(response_id = %response.id(), "Received response from Anthropic");
        Ok(GenerationOutput::new(text, "anthropic", &self.model))
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
