// crates/trustybot-widget/src/failure.rs
// Closed taxonomy of remote-call failures

use thiserror::Error;
use trustybot_types::ErrorCode;

/// Everything the backend boundary can report back to the controller.
/// Transport-specific shapes never leak past this enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatFailure {
    #[error("chat API rejected the credentials")]
    InvalidApiKey,

    #[error("chat API is rate limited")]
    RateLimited,

    #[error("chat API is out of credits")]
    OutOfCredits,

    #[error("chat server unreachable: {0}")]
    ServerOffline(String),

    #[error("chat API error (status {status})")]
    Api { status: u16 },

    #[error("unexpected chat response: {0}")]
    MalformedResponse(String),
}

impl ChatFailure {
    /// Classify a non-success response from its status and optional tag.
    ///
    /// Precedence: credentials, then rate limit, then credits, then generic.
    /// Either the tag or the status can select a category.
    pub fn from_status(status: u16, code: Option<ErrorCode>) -> Self {
        if code == Some(ErrorCode::InvalidApiKey) || status == 401 {
            ChatFailure::InvalidApiKey
        } else if code == Some(ErrorCode::RateLimited) || status == 429 {
            ChatFailure::RateLimited
        } else if code == Some(ErrorCode::OutOfCredits) || status == 402 {
            ChatFailure::OutOfCredits
        } else {
            ChatFailure::Api { status }
        }
    }

    /// Short machine-style label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ChatFailure::InvalidApiKey => "invalid_api_key",
            ChatFailure::RateLimited => "rate_limited",
            ChatFailure::OutOfCredits => "out_of_credits",
            ChatFailure::ServerOffline(_) => "server_offline",
            ChatFailure::Api { .. } => "api_error",
            ChatFailure::MalformedResponse(_) => "malformed_response",
        }
    }
}
