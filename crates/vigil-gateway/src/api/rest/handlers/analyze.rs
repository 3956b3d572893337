//! Emotion detection endpoint

use crate::api::rest::state::AppState;
use crate::api::rest::upload::{read_file_field, IMAGE_FIELD};
use crate::error::{ApiError, ApiResult, Failure};
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use vigil_classify::{normalize_label, EmotionLabel};
use vigil_vision::{ImagePayload, VisionError, VisionModel};

/// Instruction sent alongside every image.
pub const EMOTION_INSTRUCTION: &str = "Detect emotion from face. \
Return ONLY one word from this list: \
happy, sad, angry, fear, disgust, surprise, neutral. \
If unsure, return the closest match. No sentences.";

const EMOTION_FAILED: &str = "Emotion detection failed";

/// Normalized label plus the lower-cased, trimmed model reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionReading {
    pub emotion: EmotionLabel,
    pub raw: String,
}

/// Ask the model for an emotion and normalize its reply. One call, no retry.
pub async fn detect_emotion(
    model: &dyn VisionModel,
    image: &ImagePayload,
) -> Result<EmotionReading, VisionError> {
    tracing::info!(bytes = image.len(), mime_type = %image.mime_type, "analyzing image");

    let reply = model.generate(EMOTION_INSTRUCTION, image).await?;
    let raw = reply.to_lowercase().trim().to_string();
    tracing::info!(model = model.name(), raw = %raw, "raw model output");

    Ok(EmotionReading {
        emotion: normalize_label(&raw),
        raw,
    })
}

/// `POST /analyze`
pub async fn analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<EmotionReading>, Failure> {
    analyze_upload(&state, multipart)
        .await
        .map(Json)
        .map_err(|err| err.reported_as(EMOTION_FAILED))
}

async fn analyze_upload(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<EmotionReading> {
    let upload = read_file_field(multipart?, IMAGE_FIELD).await?;
    let image = upload.into_image();
    detect_emotion(state.model.as_ref(), &image)
        .await
        .map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct CannedModel(&'static str);

    #[async_trait]
    impl VisionModel for CannedModel {
        fn name(&self) -> &str {
            "canned"
        }

        async fn generate(
            &self,
            instruction: &str,
            _image: &ImagePayload,
        ) -> Result<String, VisionError> {
            assert_eq!(instruction, EMOTION_INSTRUCTION);
            Ok(self.0.to_string())
        }
    }

    fn image() -> ImagePayload {
        ImagePayload::new("image/jpeg", vec![0xff, 0xd8, 0xff])
    }

    #[test]
    fn test_instruction_lists_every_label() {
        for label in EmotionLabel::ALL {
            assert!(EMOTION_INSTRUCTION.contains(label.as_str()));
        }
        assert!(EMOTION_INSTRUCTION.ends_with("No sentences."));
    }

    #[tokio::test]
    async fn test_reply_is_case_folded_and_trimmed() {
        let reading = detect_emotion(&CannedModel("  Emotion: Happy\n"), &image())
            .await
            .unwrap();
        assert_eq!(reading.emotion, EmotionLabel::Happy);
        assert_eq!(reading.raw, "emotion: happy");
    }

    #[tokio::test]
    async fn test_synonym_reply() {
        let reading = detect_emotion(&CannedModel("The person looks SHOCKED"), &image())
            .await
            .unwrap();
        assert_eq!(reading.emotion, EmotionLabel::Surprise);
    }

    #[tokio::test]
    async fn test_unrecognized_reply_is_neutral() {
        let reading = detect_emotion(&CannedModel("pensive"), &image())
            .await
            .unwrap();
        assert_eq!(reading.emotion, EmotionLabel::Neutral);
        assert_eq!(reading.raw, "pensive");
    }
}
