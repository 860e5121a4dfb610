// crates/trustybot-server/src/proxy/routes.rs
// HTTP route handlers for the proxy

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderValue, Method, header, request::Parts},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;
use trustybot_types::{ChatReply, ChatRequest, HealthStatus};

use crate::error::ProxyError;
use crate::prompt::SYSTEM_PROMPT;
use crate::proxy::ProxyServer;
use crate::proxy::upstream::{self, MessagesRequest};

const SERVICE_NAME: &str = "TrustyBot API";

/// Create the axum router with all proxy routes
pub fn create_router(server: ProxyServer) -> Router {
    let cors = cors_layer(server.config.allowed_origins.clone());

    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))
        .route("/api/chat", post(chat))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(server)
}

fn cors_layer(allowed: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .is_ok_and(|origin| is_allowed_origin(origin, &allowed))
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Configured origins, any local dev server, and `null` (pages opened from disk)
pub fn is_allowed_origin(origin: &str, allowed: &[String]) -> bool {
    if origin == "null" || allowed.iter().any(|a| a == origin) {
        return true;
    }
    ["http://localhost", "http://127.0.0.1"].iter().any(|local| {
        origin
            .strip_prefix(local)
            .is_some_and(|rest| rest.is_empty() || is_port_suffix(rest))
    })
}

fn is_port_suffix(rest: &str) -> bool {
    rest.strip_prefix(':')
        .is_some_and(|port| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()))
}

/// Health check endpoint
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        endpoints: None,
    })
}

/// Root endpoint, polled by the hosting platform
async fn root() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        endpoints: Some(vec!["/api/chat".to_string(), "/api/health".to_string()]),
    })
}

/// Forward the transcript upstream with the persona attached
async fn chat(
    State(server): State<ProxyServer>,
    body: Bytes,
) -> Result<Json<ChatReply>, ProxyError> {
    let request: ChatRequest =
        serde_json::from_slice(&body).map_err(|_| ProxyError::BadRequest)?;

    let api_key = server
        .config
        .api_key
        .as_deref()
        .filter(|key| !key.trim().is_empty())
        .ok_or(ProxyError::InvalidApiKey)?;

    let upstream_request = MessagesRequest {
        model: server.config.model.clone(),
        max_tokens: server.config.max_tokens,
        system: SYSTEM_PROMPT.to_string(),
        messages: request.messages,
    };

    let response = server
        .upstream
        .send(api_key, &upstream_request)
        .await
        .map_err(|e| ProxyError::Api(e.to_string()))?;

    let content = upstream::interpret(&response)?;
    debug!(
        turns = upstream_request.messages.len(),
        reply_chars = content.len(),
        "Request completed"
    );

    Ok(Json(ChatReply { content }))
}
