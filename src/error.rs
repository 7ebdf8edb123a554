use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::num::ParseIntError;
use tracing::{error, warn};

/// Failures of a single catalog fetch.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid upstream payload (HTTP {status}): {source}")]
    InvalidPayload {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Everything that can fail while serving a page request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid page parameter '{raw}': {source}")]
    InvalidPage {
        raw: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    Feed(#[from] FeedError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidPage { .. } => StatusCode::BAD_REQUEST,
            AppError::Feed(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::InvalidPage { .. } => warn!("Rejecting request: {}", self),
            AppError::Feed(e) => error!("Failed to load popular movies: {}", e),
        }
        let body = match self {
            AppError::InvalidPage { .. } => "Invalid page parameter",
            AppError::Feed(_) => "Failed to load movies",
        };
        (status, body).into_response()
    }
}
