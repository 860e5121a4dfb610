// src/main.rs
// TrustyBot - backend proxy and terminal chat

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve(cli.serve));

    // RUST_LOG wins; otherwise quiet in chat mode so logs don't interleave with replies
    let default_level = match (&command, cli.debug) {
        (_, true) => "debug",
        (Commands::Chat(_), false) => "warn",
        (Commands::Serve(_), false) => "info",
    };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match command {
        Commands::Serve(args) => cli::run_serve(args).await,
        Commands::Chat(args) => cli::run_chat(args).await,
    }
}
