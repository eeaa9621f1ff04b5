//! Standardized API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use rpe_core::DatasetSummary;

/// Freshness summary for the response sheet.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub status: String,
    /// Distinct sessions in the full (unwindowed) dataset.
    pub session_count: usize,
    /// Distinct athletes in the full (unwindowed) dataset.
    pub athlete_count: usize,
    /// Rows excluded during ingestion on this pass.
    pub rows_dropped: usize,
    pub last_updated: String,
}

impl RefreshResponse {
    pub fn success(summary: &DatasetSummary, rows_dropped: usize) -> Self {
        Self {
            status: "success".to_string(),
            session_count: summary.session_count,
            athlete_count: summary.athlete_count,
            rows_dropped,
            last_updated: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub sheet_connected: bool,
    pub last_refresh_ok: bool,
    /// Unix seconds of the last successful batch refresh; 0 before the
    /// first one completes.
    pub last_refresh_epoch: u64,
    pub rows_dropped: u64,
    pub label_fallbacks: u64,
}

/// Error payload: a status marker plus the pipeline error's message text.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

/// Wrapper that renders any pipeline failure as a server error carrying
/// the error's message text, verbatim. Finer-grained status codes are a
/// non-goal: callers only need to know the run failed and why.
pub struct ApiError(pub rpe_core::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                status: "error".to_string(),
                message: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<rpe_core::Error> for ApiError {
    fn from(err: rpe_core::Error) -> Self {
        Self(err)
    }
}
