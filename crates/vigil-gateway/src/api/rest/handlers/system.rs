//! Liveness endpoint

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// `GET /test`
pub async fn test_status() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}
