use crate::openai_compat::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::{GenerationDriver, GenerationOutput, GenerationRequest};
use async_trait::async_trait;
use lectern_error::{ModelsError, ModelsErrorKind, ModelsResult, ProviderErrorKind};
use reqwest::Client;
use tracing::{debug, error, instrument};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
const OPENAI_MODEL_VAR: &str = "OPENAI_MODEL";
const OPENAI_DEFAULT_MODEL: &str = "gpt-4o";

const XAI_API_KEY_VAR: &str = "XAI_API_KEY";
const XAI_MODEL_VAR: &str = "XAI_MODEL";
const XAI_BASE_URL_VAR: &str = "XAI_BASE_URL";
const XAI_DEFAULT_BASE_URL: &str = "https://api.x.ai/v1";
const XAI_DEFAULT_MODEL: &str = "grok-beta";

/// Chat-completions driver parameterized by base URL, used for both
/// OpenAI and the OpenAI-compatible xAI API.
#[derive(Debug, Clone)]
pub struct OpenAiCompatDriver {
    client: Client,
    provider: &'static str,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiCompatDriver {
    /// Creates a new chat-completions driver.
    pub fn new(
        provider: &'static str,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        debug!(provider = provider, "Creating new chat-completions driver");
        Self {
            client: Client::new(),
            provider,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build an OpenAI driver from `OPENAI_API_KEY` and `OPENAI_MODEL`.
    pub fn openai_from_env() -> ModelsResult<Self> {
        let api_key = std::env::var(OPENAI_API_KEY_VAR).map_err(|_| {
            ModelsError::provider(
                "openai",
                ProviderErrorKind::MissingCredential(OPENAI_API_KEY_VAR),
            )
        })?;
        let model =
            std::env::var(OPENAI_MODEL_VAR).unwrap_or_else(|_| OPENAI_DEFAULT_MODEL.to_string());
        Ok(Self::new("openai", OPENAI_BASE_URL, api_key, model))
    }

    /// Build an xAI driver from `XAI_API_KEY`, `XAI_MODEL`, and
    /// `XAI_BASE_URL`.
    pub fn xai_from_env() -> ModelsResult<Self> {
        let api_key = std::env::var(XAI_API_KEY_VAR).map_err(|_| {
            ModelsError::provider("xai", ProviderErrorKind::MissingCredential(XAI_API_KEY_VAR))
        })?;
        let base_url =
            std::env::var(XAI_BASE_URL_VAR).unwrap_or_else(|_| XAI_DEFAULT_BASE_URL.to_string());
        let model = std::env::var(XAI_MODEL_VAR).unwrap_or_else(|_| XAI_DEFAULT_MODEL.to_string());
        Ok(Self::new("xai", base_url, api_key, model))
    }

    #[instrument(skip(self, request), fields(provider = self.provider, model = %self.model))]
    async fn send(&self, request: &ChatCompletionRequest) -> ModelsResult<ChatCompletionResponse> {
        debug!("Sending chat-completions request");

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send chat-completions request");
                ModelsError::provider(self.provider, ProviderErrorKind::Http(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Chat-completions API returned error");
            return Err(ModelsError::provider(
                self.provider,
                ProviderErrorKind::ApiError {
                    status: status.as_u16(),
                    message: body,
                },
            ));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse chat-completions response");
            ModelsError::provider(self.provider, ProviderErrorKind::Parse(e.to_string()))
        })
    }

    fn convert_request(&self, request: &GenerationRequest) -> ModelsResult<ChatCompletionRequest> {
        let message = ChatMessage::builder()
            .role("user")
            .content(request.prompt().clone())
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))?;

        ChatCompletionRequest::builder()
            .model(&self.model)
            .max_tokens(*request.max_tokens())
            .temperature(Some(*request.temperature()))
            .messages(vec![message])
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))
    }
}

#[async_trait]
impl GenerationDriver for OpenAiCompatDriver {
    #[instrument(skip(self, request))]
    async fn generate(&self, request: &GenerationRequest) -> ModelsResult<GenerationOutput> {
        let chat_request = self.convert_request(request)?;
        let response = self.send(&chat_request).await?;

        let text = response.first_text().unwrap_or_default();
        if text.is_empty() {
            return Err(ModelsError::provider(
                self.provider,
                ProviderErrorKind::EmptyResponse,
            ));
        }

        Ok(GenerationOutput::new(text, self.provider, &self.model))
    }

    fn provider_name(&self) -> &'static str {
        self.provider
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
