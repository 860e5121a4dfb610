// crates/trustybot-server/src/error.rs
// Proxy error types and their wire responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use trustybot_types::{ErrorBody, ErrorCode};

/// Message returned for a missing or malformed chat body
pub const BAD_REQUEST_MESSAGE: &str = "Invalid request: messages required";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProxyError {
    #[error("invalid request: messages required")]
    BadRequest,

    #[error("upstream rejected the API key")]
    InvalidApiKey,

    #[error("upstream rate limit hit")]
    RateLimited,

    #[error("upstream account out of credits")]
    OutOfCredits,

    #[error("upstream error: {0}")]
    Api(String),

    #[error("unexpected upstream response: {0}")]
    Server(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::BadRequest => StatusCode::BAD_REQUEST,
            ProxyError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            ProxyError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ProxyError::OutOfCredits => StatusCode::PAYMENT_REQUIRED,
            ProxyError::Api(_) | ProxyError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Tag the widget classifies on (bad requests carry free text)
    pub fn body(&self) -> ErrorBody {
        match self {
            ProxyError::BadRequest => ErrorBody::new(BAD_REQUEST_MESSAGE),
            ProxyError::InvalidApiKey => ErrorCode::InvalidApiKey.into(),
            ProxyError::RateLimited => ErrorCode::RateLimited.into(),
            ProxyError::OutOfCredits => ErrorCode::OutOfCredits.into(),
            ProxyError::Api(_) => ErrorCode::ApiError.into(),
            ProxyError::Server(_) => ErrorCode::ServerError.into(),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match &self {
            ProxyError::Api(_) | ProxyError::Server(_) => tracing::error!("{}", self),
            _ => tracing::warn!("{}", self),
        }
        (self.status(), Json(self.body())).into_response()
    }
}
