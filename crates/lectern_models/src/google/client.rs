use crate::google::{GenerateContentRequest, GenerateContentResponse};
use crate::{GenerationDriver, GenerationOutput, GenerationRequest};
use async_trait::async_trait;
use lectern_error::{ModelsError, ModelsResult, ProviderErrorKind};
use reqwest::Client;
use tracing::{debug, error, instrument};

const GOOGLE_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const API_KEY_VAR: &str = "GOOGLE_API_KEY";
const MODEL_VAR: &str = "GOOGLE_MODEL";
const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Google Gemini `generateContent` driver.
#[derive(Debug, Clone)]
pub struct GoogleDriver {
    client: Client,
    api_key: String,
    model: String,
}

impl GoogleDriver {
    /// Creates a new Gemini driver.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new Google Gemini driver");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build a driver from `GOOGLE_API_KEY` and `GOOGLE_MODEL`.
    pub fn from_env() -> ModelsResult<Self> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            ModelsError::provider("google", ProviderErrorKind::MissingCredential(API_KEY_VAR))
        })?;
        let model = std::env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, model))
    }

    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn send(
        &self,
        request: &GenerateContentRequest,
    ) -> ModelsResult<GenerateContentResponse> {
        debug!("Sending request to Gemini API");

        let url = format!(
            "{}/{}:generateContent?key={}",
            GOOGLE_API_BASE, self.model, self.api_key
        );
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                ModelsError::provider("google", ProviderErrorKind::Http(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini API returned error");
            return Err(ModelsError::provider(
                "google",
                ProviderErrorKind::ApiError {
                    status: status.as_u16(),
                    message: body,
                },
            ));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            ModelsError::provider("google", ProviderErrorKind::Parse(e.to_string()))
        })
    }
}

#[async_trait]
impl GenerationDriver for GoogleDriver {
    #[instrument(skip(self, request))]
    async fn generate(&self, request: &GenerationRequest) -> ModelsResult<GenerationOutput> {
        let gemini_request = GenerateContentRequest::from_prompt(
            request.prompt().clone(),
            *request.max_tokens(),
            *request.temperature(),
        );
        let response = self.send(&gemini_request).await?;

        let text = response.text();
        if text.is_empty() {
            return Err(ModelsError::provider(
                "google",
                ProviderErrorKind::EmptyResponse,
            ));
        }

        Ok(GenerationOutput::new(text, "google", &self.model))
    }

    fn provider_name(&self) -> &'static str {
        "google"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
