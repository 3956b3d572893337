//! Multipart file extraction shared by the image endpoints.

use crate::error::{ApiError, ApiResult};
use axum::body::Bytes;
use axum::extract::Multipart;
use vigil_vision::ImagePayload;

/// Form field carrying the uploaded image.
pub const IMAGE_FIELD: &str = "image";

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// One uploaded file part.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl Upload {
    pub fn into_image(self) -> ImagePayload {
        let mime_type = self
            .content_type
            .unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string());
        ImagePayload::new(mime_type, self.data.to_vec())
    }
}

/// Return the first file part named `field_name`.
///
/// Parts without a filename are plain form values, not files, and are
/// skipped.
pub async fn read_file_field(mut multipart: Multipart, field_name: &str) -> ApiResult<Upload> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(field_name) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;

        return Ok(Upload {
            file_name,
            content_type,
            data,
        });
    }

    Err(ApiError::MissingFile(field_name.to_string()))
}
