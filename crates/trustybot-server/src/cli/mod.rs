// src/cli/mod.rs
// CLI module for TrustyBot commands

use clap::{Parser, Subcommand};

pub mod chat;
pub mod colors;
pub mod serve;

pub use chat::{ChatArgs, run_chat};
pub use serve::{ServeArgs, run_serve};

#[derive(Parser)]
#[command(name = "trustybot")]
#[command(about = "TrustyBot backend proxy and terminal chat")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Serve flags, used when no subcommand is given
    #[command(flatten)]
    pub serve: ServeArgs,

    /// Debug-level logging (RUST_LOG overrides)
    #[arg(long, global = true, env = "TRUSTYBOT_DEBUG")]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the backend proxy (default)
    Serve(ServeArgs),

    /// Chat with TrustyBot from the terminal
    Chat(ChatArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["trustybot", "--port", "6000"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.serve.port, 6000);
    }

    #[test]
    fn test_chat_subcommand() {
        let cli =
            Cli::try_parse_from(["trustybot", "chat", "--endpoint", "http://x/api/chat"]).unwrap();
        let Some(Commands::Chat(args)) = cli.command else {
            panic!("expected chat");
        };
        assert_eq!(args.endpoint.as_deref(), Some("http://x/api/chat"));
    }

    #[test]
    fn test_origin_list_splits_on_commas() {
        let cli = Cli::try_parse_from([
            "trustybot",
            "serve",
            "--allowed-origin",
            "https://a.test,https://b.test",
        ])
        .unwrap();
        let Some(Commands::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.allowed_origins, ["https://a.test", "https://b.test"]);
    }
}
