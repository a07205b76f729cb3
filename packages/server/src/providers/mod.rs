pub mod anthropic;
pub mod openai;
pub mod prompt;
pub mod templates;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AiConfig;
use crate::models::brief::Quality;

/// Failure talking to an AI provider. Surfaced to clients as a generic
/// upstream error; never retried.
#[derive(Debug)]
pub enum ProviderError {
    Http(reqwest::Error),
    /// Non-success status from the provider API.
    Api { status: u16, body: String },
    /// The response had no usable content where some was expected.
    EmptyResponse,
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(e) => write!(f, "provider request failed: {e}"),
            Self::Api { status, body } => write!(f, "provider returned {status}: {body}"),
            Self::EmptyResponse => write!(f, "provider returned an empty response"),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

/// Text-generation provider producing the badge brief.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Run one completion for a system+user prompt pair and return the raw
    /// model text.
    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError>;

    /// Model identifier recorded on generated badges.
    fn model_name(&self) -> &str;
}

/// Image-generation provider producing the badge artwork.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Generate one image and return its URL.
    async fn generate(&self, prompt: &str, quality: Quality) -> Result<String, ProviderError>;

    /// Model identifier recorded on generated badges.
    fn model_name(&self) -> &str;
}

/// Build the configured providers. Selection is an explicit config value,
/// not credential sniffing; image generation always goes through OpenAI.
pub fn from_config(
    cfg: &AiConfig,
) -> anyhow::Result<(Arc<dyn TextProvider>, Arc<dyn ImageProvider>)> {
    let http = reqwest::Client::new();

    let openai = Arc::new(openai::OpenAiProvider::new(
        http.clone(),
        cfg.openai_api_key.clone(),
        if cfg.text_model.is_empty() {
            openai::DEFAULT_TEXT_MODEL.to_string()
        } else {
            cfg.text_model.clone()
        },
        cfg.image_model.clone(),
    ));

    let image: Arc<dyn ImageProvider> = openai.clone();

    let text: Arc<dyn TextProvider> = match cfg.provider.as_str() {
        "openai" => openai,
        "anthropic" => Arc::new(anthropic::AnthropicProvider::new(
            http,
            cfg.anthropic_api_key.clone(),
            if cfg.text_model.is_empty() {
                anthropic::DEFAULT_TEXT_MODEL.to_string()
            } else {
                cfg.text_model.clone()
            },
        )),
        other => anyhow::bail!("Unknown ai.provider '{other}' (expected 'anthropic' or 'openai')"),
    };

    Ok((text, image))
}
