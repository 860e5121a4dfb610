// tests/widget_roundtrip.rs
// The widget's HTTP backend against a live proxy on an ephemeral port

use std::cell::RefCell;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::LocalSet;
use trustybot::proxy::{MessagesRequest, Upstream, UpstreamError, UpstreamResponse};
use trustybot::{ProxyConfig, ProxyServer, create_router};
use trustybot_types::{ChatRequest, Role, Turn};
use trustybot_widget::{
    ChatBackend, ChatFailure, ChatWidget, Entry, HttpBackend, NoticeKind, ScrollTarget,
    SendOutcome, TokioScheduler, WidgetView,
};

struct CannedUpstream {
    status: u16,
    body: Value,
}

#[async_trait]
impl Upstream for CannedUpstream {
    async fn send(
        &self,
        _api_key: &str,
        request: &MessagesRequest,
    ) -> Result<UpstreamResponse, UpstreamError> {
        // Echo the turn count so replay is observable from the client
        let body = if self.status == 200 {
            json!({"content": [{"type": "text",
                "text": format!("{} turns received", request.messages.len())}]})
        } else {
            self.body.clone()
        };
        Ok(UpstreamResponse {
            status: self.status,
            body,
        })
    }
}

/// Serve the proxy on 127.0.0.1:0 and return its chat URL
async fn spawn_proxy(config: ProxyConfig, upstream: CannedUpstream) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(ProxyServer::with_upstream(config, Arc::new(upstream)));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/chat")
}

fn keyed() -> ProxyConfig {
    ProxyConfig {
        api_key: Some("sk-test".into()),
        ..Default::default()
    }
}

fn ok_upstream() -> CannedUpstream {
    CannedUpstream {
        status: 200,
        body: Value::Null,
    }
}

fn one_turn() -> ChatRequest {
    ChatRequest {
        messages: vec![Turn::user("Is it safe to microwave a fork?")],
    }
}

#[tokio::test]
async fn test_reply_reaches_widget_backend() {
    let url = spawn_proxy(keyed(), ok_upstream()).await;
    let reply = HttpBackend::new(url).complete(&one_turn()).await.unwrap();
    assert_eq!(reply, "1 turns received");
}

#[tokio::test]
async fn test_rate_limit_tag_survives_the_wire() {
    let upstream = CannedUpstream {
        status: 429,
        body: json!({"error": {"type": "rate_limit_error", "message": "slow down"}}),
    };
    let url = spawn_proxy(keyed(), upstream).await;
    let err = HttpBackend::new(url).complete(&one_turn()).await.unwrap_err();
    assert_eq!(err, ChatFailure::RateLimited);
}

#[tokio::test]
async fn test_missing_key_becomes_configuration_error() {
    let url = spawn_proxy(ProxyConfig::default(), ok_upstream()).await;
    let err = HttpBackend::new(url).complete(&one_turn()).await.unwrap_err();
    assert_eq!(err, ChatFailure::InvalidApiKey);
    assert_eq!(NoticeKind::from(&err), NoticeKind::ConfigurationError);
}

#[tokio::test]
async fn test_generic_upstream_failure() {
    let upstream = CannedUpstream {
        status: 500,
        body: json!({"error": {"message": "internal"}}),
    };
    let url = spawn_proxy(keyed(), upstream).await;
    let err = HttpBackend::new(url).complete(&one_turn()).await.unwrap_err();
    assert_eq!(err, ChatFailure::Api { status: 500 });
}

#[tokio::test]
async fn test_closed_port_is_server_offline() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = HttpBackend::new(format!("http://{addr}/api/chat"))
        .complete(&one_turn())
        .await
        .unwrap_err();
    assert!(matches!(err, ChatFailure::ServerOffline(_)));
}

#[derive(Default)]
struct Transcript {
    entries: RefCell<Vec<Entry>>,
}

impl WidgetView for Transcript {
    fn append(&self, entry: &Entry) {
        self.entries.borrow_mut().push(entry.clone());
    }
    fn show_typing(&self) {}
    fn hide_typing(&self) {}
    fn clear_input(&self) {}
    fn scroll_to(&self, _target: ScrollTarget) {}
    fn lock_input(&self, _placeholder: &str) {}
    fn set_counter(&self, _label: &str) {}
}

#[tokio::test]
async fn test_widget_session_over_http() {
    let url = spawn_proxy(keyed(), ok_upstream()).await;

    LocalSet::new()
        .run_until(async move {
            let widget = ChatWidget::new(HttpBackend::new(url), Transcript::default(), TokioScheduler);
            widget.mount();

            assert_eq!(
                widget.send("first").await,
                SendOutcome::Replied { limit_pending: false }
            );
            assert_eq!(
                widget.send("second").await,
                SendOutcome::Replied { limit_pending: false }
            );

            let history = widget.history();
            assert_eq!(history.len(), 4);
            assert_eq!(history[1], Turn::assistant("1 turns received"));
            assert_eq!(history[3], Turn::assistant("3 turns received"));
            assert_eq!(history[2].role, Role::User);
            assert_eq!(widget.view().entries.borrow().len(), 4);
            assert_eq!(widget.remaining_label(), "3 messages remaining");
        })
        .await;
}
