// crates/trustybot-server/src/config.rs
// Proxy configuration (filled from CLI flags / environment)

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 300;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://alnowatzki.github.io";

/// Everything the proxy needs at runtime
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub bind: String,
    pub port: u16,
    /// Upstream credential. `None` means every chat call fails with
    /// INVALID_API_KEY without touching the network.
    pub api_key: Option<String>,
    pub upstream_url: String,
    pub model: String,
    pub max_tokens: u32,
    /// Exact origins allowed besides local development ones
    pub allowed_origins: Vec<String>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            api_key: None,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
        }
    }
}

impl ProxyConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}
