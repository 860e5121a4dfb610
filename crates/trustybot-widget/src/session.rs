// crates/trustybot-widget/src/session.rs
// Session state for one widget instance (lifetime = one page load)

use trustybot_types::{ChatRequest, Role, Turn};

/// Hard cap on user messages per session
pub const MAX_MESSAGES: usize = 5;

/// Counter, transcript and the two gating flags.
///
/// Fields are only mutated through `ChatController`; everything outside the
/// crate gets read access.
#[derive(Debug, Clone, Default)]
pub struct Session {
    message_count: usize,
    history: Vec<Turn>,
    is_typing: bool,
    is_disabled: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of user turns sent so far
    pub fn message_count(&self) -> usize {
        self.message_count
    }

    /// Transcript in chronological order
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// True while a remote call is in flight
    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Terminal flag: once set, nothing else is sent this session
    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    /// Full-replay payload for the next remote call
    pub fn to_request(&self) -> ChatRequest {
        ChatRequest {
            messages: self.history.clone(),
        }
    }

    pub(crate) fn push_user(&mut self, content: String) {
        self.message_count += 1;
        self.history.push(Turn {
            role: Role::User,
            content,
        });
    }

    pub(crate) fn push_assistant(&mut self, content: String) {
        self.history.push(Turn {
            role: Role::Assistant,
            content,
        });
    }

    pub(crate) fn set_typing(&mut self, typing: bool) {
        self.is_typing = typing;
    }

    pub(crate) fn disable(&mut self) {
        self.is_disabled = true;
    }
}
