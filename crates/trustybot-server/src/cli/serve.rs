// src/cli/serve.rs
// Backend proxy command

use anyhow::Result;
use clap::Args;
use trustybot::config::{
    DEFAULT_ALLOWED_ORIGIN, DEFAULT_BIND, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_PORT,
    DEFAULT_UPSTREAM_URL,
};
use trustybot::{ProxyConfig, ProxyServer};

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "TRUSTYBOT_BIND", default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Messages API key
    #[arg(long, env = "CLAUDE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Messages API URL
    #[arg(long, env = "CLAUDE_API_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    /// Model requested upstream
    #[arg(long, env = "TRUSTYBOT_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Reply length cap
    #[arg(long, env = "TRUSTYBOT_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Extra CORS origins (comma separated); localhost is always allowed
    #[arg(
        long = "allowed-origin",
        env = "TRUSTYBOT_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = DEFAULT_ALLOWED_ORIGIN
    )]
    pub allowed_origins: Vec<String>,
}

impl ServeArgs {
    pub fn into_config(self) -> ProxyConfig {
        ProxyConfig {
            bind: self.bind,
            port: self.port,
            api_key: self.api_key,
            upstream_url: self.upstream_url,
            model: self.model,
            max_tokens: self.max_tokens,
            allowed_origins: self.allowed_origins,
        }
    }
}

/// Start the proxy in the foreground
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.into_config();
    ProxyServer::new(config).run().await
}
