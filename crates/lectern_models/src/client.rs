//! Single entry point dispatching over the closed provider set.

use crate::{
    AnthropicDriver, GenerationDriver, GenerationOutput, GenerationRequest, GoogleDriver,
    OllamaDriver, OpenAiCompatDriver, Provider,
};
use async_trait::async_trait;
use lectern_error::ModelsResult;
use tracing::{info, instrument};

/// Generation client bound to exactly one provider.
///
/// Construction performs all configuration checks: provider selection,
/// credential lookup, and model resolution. After that the client is
/// interchangeable with any other, and callers never branch on which
/// provider backs it.
///
/// # Examples
///
/// ```no_run
/// use lectern_models::{GenerationDriver, GenerationRequest, ProviderClient};
///
/// # async fn run() -> anyhow::Result<()> {
/// let client = ProviderClient::from_env()?;
/// let request = GenerationRequest::builder()
///     .prompt("Summarize this talk.")
///     .build()?;
/// let output = client.generate(&request).await?;
/// println!("{} ({}): {}", output.provider(), output.model(), output.text());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub enum ProviderClient {
    /// Anthropic Messages API
    Anthropic(AnthropicDriver),
    /// OpenAI chat completions
    OpenAi(OpenAiCompatDriver),
    /// Google Gemini generateContent
    Google(GoogleDriver),
    /// Local Ollama server
    Ollama(OllamaDriver),
    /// xAI Grok, OpenAI-compatible
    Xai(OpenAiCompatDriver),
}

impl ProviderClient {
    /// Construct the client for one provider, reading its credentials
    /// and model configuration from the environment.
    pub fn new(provider: Provider) -> ModelsResult<Self> {
        let client = match provider {
            Provider::Anthropic => Self::Anthropic(AnthropicDriver::from_env()?),
            Provider::OpenAi => Self::OpenAi(OpenAiCompatDriver::openai_from_env()?),
            Provider::Google => Self::Google(GoogleDriver::from_env()?),
            Provider::Ollama => Self::Ollama(OllamaDriver::from_env()),
            Provider::Xai => Self::Xai(OpenAiCompatDriver::xai_from_env()?),
        };
        info!(provider = %provider, model = client.model_name(), "Initialized generation client");
        Ok(client)
    }

    /// Construct the client selected by the `AI_PROVIDER` variable.
    pub fn from_env() -> ModelsResult<Self> {
        Self::new(Provider::from_env()?)
    }
}

#[async_trait]
impl GenerationDriver for ProviderClient {
    #[instrument(skip(self, request), fields(provider = self.provider_name()))]
    async fn generate(&self, request: &GenerationRequest) -> ModelsResult<GenerationOutput> {
        match self {
            Self::Anthropic(driver) => driver.generate(request).await,
            Self::OpenAi(driver) => driver.generate(request).await,
            Self::Google(driver) => driver.generate(request).await,
            Self::Ollama(driver) => driver.generate(request).await,
            Self::Xai(driver) => driver.generate(request).await,
        }
    }

    fn provider_name(&self) -> &'static str {
        match self {
            Self::Anthropic(driver) => driver.provider_name(),
            Self::OpenAi(driver) => driver.provider_name(),
            Self::Google(driver) => driver.provider_name(),
            Self::Ollama(driver) => driver.provider_name(),
            Self::Xai(driver) => driver.provider_name(),
        }
    }

    fn model_name(&self) -> &str {
        match self {
            Self::Anthropic(driver) => driver.model_name(),
            Self::OpenAi(driver) => driver.model_name(),
            Self::Google(driver) => driver.model_name(),
            Self::Ollama(driver) => driver.model_name(),
            Self::Xai(driver) => driver.model_name(),
        }
    }
}
