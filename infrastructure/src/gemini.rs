use domain::providers::{GenerateError, ReplyGenerator};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("response contained no usable content")]
    EmptyResponse,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct EmbedContentRequest<'a> {
    content: Content<'a>,
}

#[derive(Deserialize)]
struct EmbedContentResponse {
    embedding: EmbeddingValues,
}

#[derive(Deserialize)]
struct EmbeddingValues {
    #[serde(default)]
    values: Vec<f32>,
}

/// Client for the hosted generative-model API. One instance serves both
/// text generation and embeddings; every request carries the configured
/// timeout so a stalled call cannot hang a turn.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    embedding_model: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiClient {
    /// A missing API key is not fatal here: calls fail per-turn and the
    /// caller falls back, which keeps FAQ and booking usable offline.
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            base_url: config.gemini_base_url.clone(),
            model: config.gemini_model.clone(),
            embedding_model: config.embedding_model.clone(),
            api_key: config.gemini_api_key.clone(),
            timeout: config.request_timeout,
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub async fn generate_reply(
        &self,
        prompt: &str,
        system_context: &str,
    ) -> Result<String, LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::MissingApiKey);
        }
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: (!system_context.is_empty()).then(|| Content {
                parts: vec![Part {
                    text: system_context,
                }],
            }),
            generation_config: GenerationConfig {
                max_output_tokens: 300,
                temperature: 0.7,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = flatten_candidates(parsed);
        if text.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(text)
    }

    pub async fn embed_text(&self, text: &str) -> Result<Vec<f32>, LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::MissingApiKey);
        }
        let url = format!(
            "{}/models/{}:embedContent",
            self.base_url, self.embedding_model
        );
        let request = EmbedContentRequest {
            content: Content {
                parts: vec![Part { text }],
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: EmbedContentResponse = response.json().await?;
        if parsed.embedding.values.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(parsed.embedding.values)
    }
}

fn flatten_candidates(response: GenerateContentResponse) -> String {
    response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .map(|p| p.text)
        .collect::<Vec<_>>()
        .join("")
        .trim()
        .to_string()
}

impl ReplyGenerator for GeminiClient {
    fn complete(
        &self,
        prompt: &str,
        system_context: &str,
    ) -> impl std::future::Future<Output = Result<String, GenerateError>> + Send {
        async move {
            self.generate_reply(prompt, system_context)
                .await
                .map_err(|err| match err {
                    LlmError::Http(inner) if inner.is_timeout() => {
                        GenerateError::Timeout(self.timeout)
                    }
                    other => GenerateError::Service(other.to_string()),
                })
        }
    }
}
