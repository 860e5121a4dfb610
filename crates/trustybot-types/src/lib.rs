// crates/trustybot-types/src/lib.rs
// Shared wire types for TrustyBot (native + WASM compatible)
// No native-only dependencies allowed here

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ═══════════════════════════════════════
// TRANSCRIPT
// ═══════════════════════════════════════

/// Who authored a turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message in the transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// ═══════════════════════════════════════
// CHAT ENDPOINT
// ═══════════════════════════════════════

/// POST /api/chat request body - the full transcript, every time
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub messages: Vec<Turn>,
}

/// POST /api/chat success body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub content: String,
}

/// Machine-readable failure tags carried in `ErrorBody::error`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidApiKey,
    RateLimited,
    OutOfCredits,
    ApiError,
    ServerError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidApiKey => "INVALID_API_KEY",
            ErrorCode::RateLimited => "RATE_LIMITED",
            ErrorCode::OutOfCredits => "OUT_OF_CREDITS",
            ErrorCode::ApiError => "API_ERROR",
            ErrorCode::ServerError => "SERVER_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INVALID_API_KEY" => Ok(ErrorCode::InvalidApiKey),
            "RATE_LIMITED" => Ok(ErrorCode::RateLimited),
            "OUT_OF_CREDITS" => Ok(ErrorCode::OutOfCredits),
            "API_ERROR" => Ok(ErrorCode::ApiError),
            "SERVER_ERROR" => Ok(ErrorCode::ServerError),
            _ => Err(()),
        }
    }
}

/// Failure body. `error` is either an `ErrorCode` tag or free text
/// (bad requests carry a human-readable message).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// The recognized tag, if `error` is one
    pub fn code(&self) -> Option<ErrorCode> {
        self.error.parse().ok()
    }
}

impl From<ErrorCode> for ErrorBody {
    fn from(code: ErrorCode) -> Self {
        Self::new(code.as_str())
    }
}

// ═══════════════════════════════════════
// HEALTH
// ═══════════════════════════════════════

/// GET /api/health and GET / body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Vec<String>>,
}
