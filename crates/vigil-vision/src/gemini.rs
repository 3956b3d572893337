//! Gemini `generateContent` adapter.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{ImagePayload, VisionError, VisionModel};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const AUTH_ENV_VAR: &str = "GEMINI_API_KEY";

const PROVIDER: &str = "gemini";
const API_KEY_HEADER: &str = "x-goog-api-key";
const ERROR_BODY_LIMIT: usize = 320;

/// Gemini connection settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Model name, e.g. `gemini-2.0-flash`
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL, or a full `...:generateContent` URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key; falls back to `GEMINI_API_KEY` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Client-side timeout for one generate call
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_request_timeout() -> u64 {
    60
}

impl GeminiConfig {
    /// Explicit key first, then the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(std::env::var(AUTH_ENV_VAR).ok())
    }

    /// Explicit key first, then `fallback`. Blank keys count as unset.
    pub fn resolve_api_key_with(&self, fallback: Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or(fallback)
            .filter(|key| !key.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Result<String, VisionError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .and_then(|feedback| feedback.block_reason)
                .map(|reason| format!("prompt blocked ({})", reason))
                .unwrap_or_else(|| "no candidates".to_string());
            return Err(VisionError::EmptyResponse {
                provider: PROVIDER,
                reason,
            });
        };

        let texts: Vec<String> = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if texts.is_empty() {
            let reason = candidate
                .finish_reason
                .map(|reason| format!("finish reason {}", reason))
                .unwrap_or_else(|| "candidate has no text parts".to_string());
            return Err(VisionError::EmptyResponse {
                provider: PROVIDER,
                reason,
            });
        }

        Ok(texts.concat())
    }
}

/// [`VisionModel`] backed by the Gemini REST API.
#[derive(Clone)]
pub struct GeminiVisionModel {
    client: Client,
    url: Url,
    api_key: String,
    model: String,
}

impl std::fmt::Debug for GeminiVisionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiVisionModel")
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiVisionModel {
    /// Build from `config`, taking the key from the config or `GEMINI_API_KEY`.
    pub fn new(config: &GeminiConfig) -> Result<Self, VisionError> {
        Self::with_api_key(config, config.resolve_api_key())
    }

    /// Build with an already resolved key; `None` is a configuration error.
    pub fn with_api_key(config: &GeminiConfig, api_key: Option<String>) -> Result<Self, VisionError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| VisionError::InvalidConfig(format!("missing {}", AUTH_ENV_VAR)))?;
        let url = resolve_endpoint(&config.endpoint, &config.model)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                VisionError::InvalidConfig(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            url,
            api_key,
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl VisionModel for GeminiVisionModel {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn generate(
        &self,
        instruction: &str,
        image: &ImagePayload,
    ) -> Result<String, VisionError> {
        let payload = json!({
            "contents": [
                {
                    "parts": [
                        { "text": instruction },
                        {
                            "inline_data": {
                                "mime_type": image.mime_type,
                                "data": base64::engine::general_purpose::STANDARD.encode(&image.data),
                            }
                        }
                    ]
                }
            ]
        });

        tracing::debug!(model = %self.model, bytes = image.len(), "sending generateContent request");

        let response = self
            .client
            .post(self.url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| VisionError::Transport {
                provider: PROVIDER,
                message: e.without_url().to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VisionError::Api {
                provider: PROVIDER,
                status: status.as_u16(),
                body: truncate(&body, ERROR_BODY_LIMIT),
            });
        }

        let body: GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|e| VisionError::InvalidResponse {
                    provider: PROVIDER,
                    message: e.without_url().to_string(),
                })?;

        body.into_text()
    }
}

/// The key travels in a header; any `key` query parameter is stripped so
/// it cannot surface in error messages or logs.
fn resolve_endpoint(endpoint: &str, model: &str) -> Result<Url, VisionError> {
    let mut url = if endpoint.contains(":generateContent") {
        Url::parse(endpoint).map_err(|e| {
            VisionError::InvalidConfig(format!("invalid gemini endpoint {}: {}", endpoint, e))
        })?
    } else {
        let generated = format!(
            "{}/v1beta/models/{}:generateContent",
            endpoint.trim_end_matches('/'),
            model
        );
        Url::parse(&generated).map_err(|e| {
            VisionError::InvalidConfig(format!("invalid gemini endpoint {}: {}", generated, e))
        })?
    };

    if url.query_pairs().any(|(k, _)| k == "key") {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| k != "key")
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(kept);
        }
    }

    Ok(url)
}

fn truncate(value: &str, max_chars: usize) -> String {
    let mut chars = value.chars();
    let truncated: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", truncated)
    } else {
        truncated
    }
}
