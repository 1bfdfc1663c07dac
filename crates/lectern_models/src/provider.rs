//! The closed set of supported generation providers.

use lectern_error::{ModelsError, ModelsErrorKind, ModelsResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable naming the active provider.
pub(crate) const PROVIDER_VAR: &str = "AI_PROVIDER";

/// A supported generation provider.
///
/// The set is closed: adding a provider means adding a variant and a
/// driver, never passing an arbitrary string through.
///
/// # Examples
///
/// ```
/// use lectern_models::Provider;
///
/// let provider: Provider = "Anthropic".parse().unwrap();
/// assert_eq!(provider, Provider::Anthropic);
/// assert_eq!(provider.as_str(), "anthropic");
///
/// let err = "cohere".parse::<Provider>().unwrap_err();
/// assert!(err.to_string().contains("anthropic, openai, google, ollama, xai"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Anthropic Claude models
    Anthropic,
    /// OpenAI models
    OpenAi,
    /// Google Gemini models
    Google,
    /// Locally hosted Ollama models
    Ollama,
    /// xAI Grok models, OpenAI-compatible API
    Xai,
}

impl Provider {
    /// The lower-case wire identifier for this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Anthropic => "anthropic",
            Provider::OpenAi => "openai",
            Provider::Google => "google",
            Provider::Ollama => "ollama",
            Provider::Xai => "xai",
        }
    }

    /// Read the provider from the `AI_PROVIDER` environment variable.
    ///
    /// An absent variable and an unrecognized value are distinct
    /// configuration errors, both raised here rather than at call time.
    pub fn from_env() -> ModelsResult<Self> {
        let raw = std::env::var(PROVIDER_VAR)
            .map_err(|_| ModelsError::new(ModelsErrorKind::ProviderNotConfigured))?;
        raw.parse()
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ModelsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anthropic" => Ok(Provider::Anthropic),
            "openai" => Ok(Provider::OpenAi),
            "google" => Ok(Provider::Google),
            "ollama" => Ok(Provider::Ollama),
            "xai" => Ok(Provider::Xai),
            other => Err(ModelsError::new(ModelsErrorKind::UnsupportedProvider(
                other.to_string(),
            ))),
        }
    }
}
