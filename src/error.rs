// src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::gemini::ProviderError;

pub const EMPTY_PROMPT: &str = "Empty prompt.";
pub const INVALID_BODY: &str = "Invalid JSON body.";
pub const NO_RESPONSE: &str = "No response from model.";
pub const UPSTREAM_FAILURE: &str = "Server error talking to Gemini.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("request body is not valid JSON: {0}")]
    InvalidBody(String),

    #[error("model returned no text")]
    NoResponse,

    #[error("Gemini error: {0}")]
    Upstream(#[from] ProviderError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyPrompt | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::NoResponse => StatusCode::BAD_GATEWAY,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body sent to the client. Never carries upstream detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::EmptyPrompt => EMPTY_PROMPT,
            AppError::InvalidBody(_) => INVALID_BODY,
            AppError::NoResponse => NO_RESPONSE,
            AppError::Upstream(_) => UPSTREAM_FAILURE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Upstream(err) => tracing::error!(error = %err, "Gemini error"),
            AppError::NoResponse => tracing::warn!("Gemini returned an empty response"),
            AppError::InvalidBody(detail) => tracing::debug!(%detail, "rejected request body"),
            AppError::EmptyPrompt => {}
        }

        (self.status(), self.public_message()).into_response()
    }
}
