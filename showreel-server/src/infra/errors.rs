use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::store::StoreError;

pub type SaveResult<T> = Result<T, SaveError>;

/// Failures of the save endpoint, each rendered as `{"error": message}`.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Method not allowed")]
    InvalidMethod,
    #[error("Invalid JSON data: {0}")]
    InvalidPayload(String),
    #[error("Failed to save data")]
    WriteFailure(#[source] StoreError),
}

impl SaveError {
    pub fn invalid_payload(reason: impl Into<String>) -> Self {
        Self::InvalidPayload(reason.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidMethod => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::WriteFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for SaveError {
    fn from(err: StoreError) -> Self {
        Self::WriteFailure(err)
    }
}

impl IntoResponse for SaveError {
    fn into_response(self) -> Response {
        match &self {
            Self::WriteFailure(source) => {
                error!(error = ?source, "data file write failed")
            }
            Self::InvalidPayload(reason) => {
                warn!(%reason, "rejected save payload")
            }
            Self::InvalidMethod => {}
        }

        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
