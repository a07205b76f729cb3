use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{ImageProvider, ProviderError, TextProvider};
use crate::models::brief::Quality;

pub const DEFAULT_TEXT_MODEL: &str = "gpt-4o-mini";

const CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const IMAGES_URL: &str = "https://api.openai.com/v1/images/generations";
const MAX_TOKENS: u32 = 500;

/// OpenAI client. Serves both the chat-completion brief step (when selected)
/// and the image-generation step (always).
pub struct OpenAiProvider {
    http: reqwest::Client,
    api_key: String,
    text_model: String,
    image_model: String,
}

impl OpenAiProvider {
    pub fn new(
        http: reqwest::Client,
        api_key: String,
        text_model: String,
        image_model: String,
    ) -> Self {
        Self {
            http,
            api_key,
            text_model,
            image_model,
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Serialize)]
struct ImagesRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
    quality: &'a str,
    style: &'a str,
}

#[derive(Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Deserialize)]
struct ImageDatum {
    #[serde(default)]
    url: Option<String>,
}

#[async_trait]
impl TextProvider for OpenAiProvider {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        let request = json!({
            "model": self.text_model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "response_format": { "type": "json_object" },
            "max_tokens": MAX_TOKENS,
        });

        let response = self
            .http
            .post(CHAT_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }

    fn model_name(&self) -> &str {
        &self.text_model
    }
}

#[async_trait]
impl ImageProvider for OpenAiProvider {
    async fn generate(&self, prompt: &str, quality: Quality) -> Result<String, ProviderError> {
        let request = ImagesRequest {
            model: &self.image_model,
            prompt,
            n: 1,
            size: "1024x1024",
            quality: quality.key(),
            style: "natural",
        };

        let response = self
            .http
            .post(IMAGES_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let parsed: ImagesResponse = response.json().await?;
        parsed
            .data
            .into_iter()
            .next()
            .and_then(|datum| datum.url)
            .ok_or(ProviderError::EmptyResponse)
    }

    fn model_name(&self) -> &str {
        &self.image_model
    }
}
