use std::io;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_limits::LimitsError;
use serde_json::json;
use thiserror::Error;
use tokio::task::JoinError;

use crate::state::EvaluationIdOverflow;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidInput(#[from] LimitsError),
    #[error("sweep accepts at most {max} values, got {got}")]
    TooManySweepPoints { max: usize, got: usize },
    #[error("evaluation counter exhausted")]
    EvaluationIdOverflow,
    #[error("failed to render comparison export: {0}")]
    Export(#[from] io::Error),
    #[error("sweep worker failed: {0}")]
    SweepTask(#[from] JoinError),
}

impl From<EvaluationIdOverflow> for ApiError {
    fn from(_: EvaluationIdOverflow) -> Self {
        Self::EvaluationIdOverflow
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidInput(_) | Self::TooManySweepPoints { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::EvaluationIdOverflow | Self::Export(_) | Self::SweepTask(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "rejected request");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
