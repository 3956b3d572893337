//! Vision model adapters for Vigil.
//!
//! The gateway treats the generative model as an opaque capability: given an
//! instruction and one image it returns free text. [`VisionModel`] is that
//! seam; [`GeminiVisionModel`] is the production transport and
//! [`UnconfiguredModel`] stands in when no credentials are available.

#![deny(unsafe_code)]

pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::{GeminiConfig, GeminiVisionModel, AUTH_ENV_VAR, DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// An uploaded image as handed to the model.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// Declared media type, e.g. `image/png`.
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImagePayload {
    pub fn new(mime_type: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("mime_type", &self.mime_type)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Failures of the generation capability.
#[derive(Debug, Error)]
pub enum VisionError {
    /// Adapter cannot run with the current configuration
    #[error("invalid model configuration: {0}")]
    InvalidConfig(String),

    /// Request never produced an HTTP response
    #[error("{provider} request failed: {message}")]
    Transport {
        provider: &'static str,
        message: String,
    },

    /// Provider answered with a non-success status
    #[error("{provider} error {status}: {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// Response body could not be decoded
    #[error("invalid {provider} response: {message}")]
    InvalidResponse {
        provider: &'static str,
        message: String,
    },

    /// Response decoded but carried no text
    #[error("{provider} returned no text: {reason}")]
    EmptyResponse {
        provider: &'static str,
        reason: String,
    },
}

/// A model that turns (instruction, image) into free text.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &str;

    /// Single request/response call; implementations do not retry.
    async fn generate(&self, instruction: &str, image: &ImagePayload)
        -> Result<String, VisionError>;
}

/// Placeholder installed when the real adapter could not be built.
///
/// Every call fails with [`VisionError::InvalidConfig`] carrying the reason,
/// so endpoints that never touch the model keep working.
#[derive(Debug, Clone)]
pub struct UnconfiguredModel {
    reason: String,
}

impl UnconfiguredModel {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl VisionModel for UnconfiguredModel {
    fn name(&self) -> &str {
        "unconfigured"
    }

    async fn generate(
        &self,
        _instruction: &str,
        _image: &ImagePayload,
    ) -> Result<String, VisionError> {
        Err(VisionError::InvalidConfig(self.reason.clone()))
    }
}
