//! Filename-based identity check endpoint

use crate::api::rest::upload::{read_file_field, IMAGE_FIELD};
use crate::error::{ApiResult, Failure};
use axum::extract::multipart::MultipartRejection;
use axum::extract::Multipart;
use axum::Json;
use vigil_classify::{check_filename, SecurityVerdict};

const SECURITY_FAILED: &str = "Security failed";

/// `POST /security`
pub async fn security(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SecurityVerdict>, Failure> {
    verify_upload(multipart)
        .await
        .map(Json)
        .map_err(|err| err.reported_as(SECURITY_FAILED))
}

async fn verify_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<SecurityVerdict> {
    let upload = read_file_field(multipart?, IMAGE_FIELD).await?;
    let verdict = check_filename(&upload.file_name);
    tracing::debug!(file_name = %upload.file_name, status = ?verdict.status, "checked upload filename");
    Ok(verdict)
}
