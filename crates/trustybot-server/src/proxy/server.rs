// crates/trustybot-server/src/proxy/server.rs
// Shared proxy state and the listen loop

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ProxyConfig;
use crate::proxy::routes;
use crate::proxy::upstream::{AnthropicClient, Upstream};

/// Shared state for the proxy server
#[derive(Clone)]
pub struct ProxyServer {
    pub config: Arc<ProxyConfig>,
    pub upstream: Arc<dyn Upstream>,
}

impl ProxyServer {
    /// Proxy talking to the configured Messages API URL
    pub fn new(config: ProxyConfig) -> Self {
        let upstream = AnthropicClient::new(config.upstream_url.clone());
        Self::with_upstream(config, Arc::new(upstream))
    }

    pub fn with_upstream(config: ProxyConfig, upstream: Arc<dyn Upstream>) -> Self {
        Self {
            config: Arc::new(config),
            upstream,
        }
    }

    /// Bind and serve until Ctrl+C / SIGTERM
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.config.listen_addr();
        let listener = TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();

        if !self.config.has_api_key() {
            warn!("CLAUDE_API_KEY not set; chat requests will fail with INVALID_API_KEY");
        }
        info!("TrustyBot backend listening on {}", addr);
        info!("Chat endpoint: http://localhost:{}/api/chat", port);
        info!("Health check: http://localhost:{}/api/health", port);

        let app = routes::create_router(self);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("SIGTERM handler unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}
