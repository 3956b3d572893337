//! Phishing text scoring endpoint

use crate::error::{ApiError, Failure};
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;
use vigil_classify::{assess_phishing, PhishingAssessment};

const PHISHING_FAILED: &str = "Phishing detection failed";

/// Request body; a missing `text` scores as empty.
#[derive(Debug, Deserialize)]
pub struct PhishingRequest {
    #[serde(default)]
    pub text: String,
}

/// `POST /phishing`
pub async fn phishing(
    payload: Result<Json<PhishingRequest>, JsonRejection>,
) -> Result<Json<PhishingAssessment>, Failure> {
    let Json(request) = payload.map_err(|err| ApiError::from(err).reported_as(PHISHING_FAILED))?;
    Ok(Json(assess_phishing(&request.text)))
}
