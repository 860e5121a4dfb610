// crates/trustybot-server/src/proxy/mod.rs
// Proxy server between the widget and the Messages API

mod routes;
mod server;
pub mod upstream;

pub use routes::{create_router, is_allowed_origin};
pub use server::ProxyServer;
pub use upstream::{AnthropicClient, MessagesRequest, Upstream, UpstreamError, UpstreamResponse};
