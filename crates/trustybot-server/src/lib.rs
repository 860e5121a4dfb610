// crates/trustybot-server/src/lib.rs
// TrustyBot backend: Messages API proxy for the chat widget

pub mod config;
pub mod error;
pub mod prompt;
pub mod proxy;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use proxy::{AnthropicClient, ProxyServer, Upstream, create_router};
