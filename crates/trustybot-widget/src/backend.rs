// crates/trustybot-widget/src/backend.rs
// Remote call boundary: one POST per accepted message

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use trustybot_types::{ChatReply, ChatRequest, ErrorBody};

use crate::endpoint;
use crate::failure::ChatFailure;

/// The conversational API the widget talks to.
///
/// Futures are not required to be `Send`: the widget runs on a
/// single-threaded event loop (browser or tokio `LocalSet`).
#[async_trait(?Send)]
pub trait ChatBackend {
    /// Send the full transcript, get the assistant's reply text
    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatFailure>;
}

/// JSON-over-HTTP backend (fetch-backed on wasm32)
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint chosen from the static host table
    pub fn for_host(host: &str) -> Self {
        Self::new(endpoint::resolve(host))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpBackend {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatFailure> {
        debug!(endpoint = %self.endpoint, turns = request.messages.len(), "POST chat");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ChatFailure::ServerOffline(e.to_string()))?;

        let status = response.status();
        let body = response.bytes().await;

        if status.is_success() {
            let body = body.map_err(|e| ChatFailure::MalformedResponse(e.to_string()))?;
            parse_reply(&body)
        } else {
            let body = body.map(|b| b.to_vec()).unwrap_or_default();
            Err(classify_error(status.as_u16(), &body))
        }
    }
}

/// Success body → reply text
pub fn parse_reply(body: &[u8]) -> Result<String, ChatFailure> {
    serde_json::from_slice::<ChatReply>(body)
        .map(|reply| reply.content)
        .map_err(|e| ChatFailure::MalformedResponse(e.to_string()))
}

/// Non-success body → failure. Bodies that are not an `ErrorBody`
/// are classified by status alone.
pub fn classify_error(status: u16, body: &[u8]) -> ChatFailure {
    let code = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.code());
    ChatFailure::from_status(status, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reply() {
        let reply = parse_reply(br#"{"content":"Capes command respect."}"#).unwrap();
        assert_eq!(reply, "Capes command respect.");
    }

    #[test]
    fn test_missing_content_is_malformed() {
        let err = parse_reply(br#"{"text":"nope"}"#).unwrap_err();
        assert!(matches!(err, ChatFailure::MalformedResponse(_)));
    }

    #[test]
    fn test_tagged_error_body() {
        assert_eq!(
            classify_error(500, br#"{"error":"RATE_LIMITED"}"#),
            ChatFailure::RateLimited
        );
        assert_eq!(
            classify_error(401, br#"{"error":"INVALID_API_KEY"}"#),
            ChatFailure::InvalidApiKey
        );
    }

    #[test]
    fn test_untagged_body_falls_back_to_status() {
        assert_eq!(classify_error(402, b"<html>payment</html>"), ChatFailure::OutOfCredits);
        assert_eq!(classify_error(502, b""), ChatFailure::Api { status: 502 });
        assert_eq!(
            classify_error(400, br#"{"error":"Invalid request: messages required"}"#),
            ChatFailure::Api { status: 400 }
        );
    }

    #[test]
    fn test_for_host_uses_table() {
        assert_eq!(
            HttpBackend::for_host("localhost").endpoint(),
            endpoint::DEVELOPMENT_ENDPOINT
        );
        assert_eq!(
            HttpBackend::for_host("alnowatzki.com").endpoint(),
            endpoint::PRODUCTION_ENDPOINT
        );
    }
}
