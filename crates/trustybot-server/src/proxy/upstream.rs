// crates/trustybot-server/src/proxy/upstream.rs
// Anthropic Messages API client and response interpretation

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use trustybot_types::Turn;

use crate::error::ProxyError;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Body sent upstream
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub system: String,
    pub messages: Vec<Turn>,
}

/// Raw upstream answer; `body` is `Null` when it was not JSON
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("upstream unreachable: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        UpstreamError::Transport(e.to_string())
    }
}

/// Where chat completions come from
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn send(
        &self,
        api_key: &str,
        request: &MessagesRequest,
    ) -> Result<UpstreamResponse, UpstreamError>;
}

#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    url: String,
}

impl AnthropicClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl Upstream for AnthropicClient {
    async fn send(
        &self,
        api_key: &str,
        request: &MessagesRequest,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let response = self
            .client
            .post(&self.url)
            .header("content-type", "application/json")
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        Ok(UpstreamResponse { status, body })
    }
}

/// Map an upstream answer to reply text or the error the widget sees
pub fn interpret(response: &UpstreamResponse) -> Result<String, ProxyError> {
    match response.status {
        401 => Err(ProxyError::InvalidApiKey),
        429 => Err(ProxyError::RateLimited),
        402 => Err(ProxyError::OutOfCredits),
        status if !(200..300).contains(&status) => {
            let message = response
                .body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or_default();
            let lowered = message.to_lowercase();
            if lowered.contains("credit") || lowered.contains("billing") {
                Err(ProxyError::OutOfCredits)
            } else {
                Err(ProxyError::Api(format!("status {status}: {message}")))
            }
        }
        _ => response
            .body
            .pointer("/content/0/text")
            .and_then(Value::as_str)
            .map(String::from)
            .ok_or_else(|| ProxyError::Server("missing content[0].text".into())),
    }
}
