// src/cli/chat.rs
// Terminal front end for the chat widget

use std::cell::Cell;
use std::io::Write;

use anyhow::Result;
use clap::Args;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::task::LocalSet;
use tracing::info;
use trustybot_widget::notice::CONTACT_EMAIL;
use trustybot_widget::{
    ChatWidget, Entry, EntryKind, HttpBackend, LIMIT_NOTICE_DELAY, NoticeKind,
    SCROLL_SETTLE_DELAY, ScrollTarget, SendOutcome, TokioScheduler, WidgetView, endpoint,
};

use super::colors::{self, ansi};

const PROMPT: &str = "you › ";

#[derive(Args, Debug, Clone)]
pub struct ChatArgs {
    /// Page host used to pick the endpoint
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Chat endpoint URL (overrides --host)
    #[arg(long, env = "TRUSTYBOT_ENDPOINT")]
    pub endpoint: Option<String>,
}

/// Prints widget output to stdout
#[derive(Default)]
struct TerminalView {
    typing: Cell<bool>,
}

impl TerminalView {
    fn print_notice(&self, kind: NoticeKind) {
        let title = match kind {
            NoticeKind::LimitReached => colors::limit_title(kind.title()),
            _ => colors::error_title(kind.title()),
        };
        println!("\n{}\n{}", title, kind.body());
        if kind.has_contact() {
            println!("{}", colors::dim(&format!("Contact: {}", CONTACT_EMAIL)));
        }
    }
}

impl WidgetView for TerminalView {
    fn append(&self, entry: &Entry) {
        match entry.kind {
            // Already echoed by the line editor
            EntryKind::User => {}
            EntryKind::Assistant => {
                println!("{} {}", colors::bot_label("TrustyBot ›"), entry.text);
            }
            EntryKind::Notice(kind) => self.print_notice(kind),
        }
    }

    fn show_typing(&self) {
        self.typing.set(true);
        print!("{}", colors::dim("TrustyBot is typing..."));
        let _ = std::io::stdout().flush();
    }

    fn hide_typing(&self) {
        if self.typing.replace(false) {
            print!("{}", ansi::CLEAR_LINE);
            let _ = std::io::stdout().flush();
        }
    }

    fn clear_input(&self) {}

    fn scroll_to(&self, _target: ScrollTarget) {}

    fn lock_input(&self, placeholder: &str) {
        println!("{}", colors::status(&format!("[{}]", placeholder)));
    }

    fn set_counter(&self, label: &str) {
        println!("{}", colors::status(label));
    }
}

/// Run an interactive session until the widget locks or the user quits
pub async fn run_chat(args: ChatArgs) -> Result<()> {
    let endpoint = args
        .endpoint
        .unwrap_or_else(|| endpoint::resolve(&args.host).to_string());
    info!(%endpoint, "Starting terminal chat");

    LocalSet::new().run_until(chat_loop(endpoint)).await
}

async fn chat_loop(endpoint: String) -> Result<()> {
    let widget = ChatWidget::new(
        HttpBackend::new(endpoint),
        TerminalView::default(),
        TokioScheduler,
    );

    println!("{}", colors::bot_label("TrustyBot"));
    println!("{}", colors::dim("Ctrl-D to quit"));
    widget.mount();

    let mut editor = DefaultEditor::new()?;
    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        if !line.trim().is_empty() {
            editor.add_history_entry(line.as_str())?;
        }

        let outcome = widget.press_enter(&line).await;
        if let Some(SendOutcome::Replied { limit_pending: true }) = outcome {
            // Let the delayed limit notice render before exiting
            tokio::time::sleep(LIMIT_NOTICE_DELAY + SCROLL_SETTLE_DELAY).await;
        }
        if widget.is_disabled() {
            break;
        }
    }

    Ok(())
}
