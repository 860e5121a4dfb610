// crates/trustybot-widget/src/controller.rs
// Synchronous submit state machine. No I/O: the async driver in
// `widget.rs` turns these transitions into backend calls and view updates.

use std::time::Duration;

use tracing::debug;
use trustybot_types::ChatRequest;

use crate::failure::ChatFailure;
use crate::notice::NoticeKind;
use crate::session::{MAX_MESSAGES, Session};

/// Delay before a scroll runs, so layout can settle
pub const SCROLL_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Delay between the last reply and the limit notice
pub const LIMIT_NOTICE_DELAY: Duration = Duration::from_millis(1000);

/// Limits and timings for one widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub max_messages: usize,
    pub scroll_settle: Duration,
    pub limit_notice_delay: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            max_messages: MAX_MESSAGES,
            scroll_settle: SCROLL_SETTLE_DELAY,
            limit_notice_delay: LIMIT_NOTICE_DELAY,
        }
    }
}

/// Why a submit did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    Typing,
    Disabled,
    Empty,
}

/// Outcome of `ChatController::submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Silent no-op; state untouched
    Ignored(Ignored),
    /// Cap already used up: the session is now disabled, nothing is sent
    LimitReached,
    /// User turn recorded, typing started; send `request`
    Dispatch { message: String, request: ChatRequest },
}

/// Outcome of `ChatController::resolve`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Reply recorded. `limit_pending` means that was the last allowed
    /// exchange and the limit notice should follow after a delay.
    Replied { reply: String, limit_pending: bool },
    /// Session disabled with the matching notice
    Failed { failure: ChatFailure, notice: NoticeKind },
}

/// Owns the session and applies every state transition
#[derive(Debug, Default)]
pub struct ChatController {
    session: Session,
    config: WidgetConfig,
}

impl ChatController {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            session: Session::new(),
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Enter key handling: only when idle and enabled
    pub fn accepts_enter(&self) -> bool {
        !self.session.is_typing() && !self.session.is_disabled()
    }

    pub fn submit(&mut self, raw: &str) -> Submission {
        if self.session.is_typing() {
            return Submission::Ignored(Ignored::Typing);
        }
        if self.session.is_disabled() {
            return Submission::Ignored(Ignored::Disabled);
        }
        let message = raw.trim();
        if message.is_empty() {
            return Submission::Ignored(Ignored::Empty);
        }

        if self.session.message_count() >= self.config.max_messages {
            self.session.disable();
            debug!(count = self.session.message_count(), "message cap reached before send");
            return Submission::LimitReached;
        }

        self.session.push_user(message.to_string());
        self.session.set_typing(true);

        Submission::Dispatch {
            message: message.to_string(),
            request: self.session.to_request(),
        }
    }

    /// Apply the result of the in-flight call
    pub fn resolve(&mut self, outcome: Result<String, ChatFailure>) -> Resolution {
        self.session.set_typing(false);

        match outcome {
            Ok(reply) => {
                self.session.push_assistant(reply.clone());
                Resolution::Replied {
                    reply,
                    limit_pending: self.session.message_count() >= self.config.max_messages,
                }
            }
            Err(failure) => {
                self.session.disable();
                let notice = NoticeKind::from(&failure);
                Resolution::Failed { failure, notice }
            }
        }
    }

    /// Deferred limit transition. Returns false when the session was already
    /// disabled, in which case no second notice should be rendered.
    pub fn reach_limit(&mut self) -> bool {
        if self.session.is_disabled() {
            return false;
        }
        self.session.disable();
        true
    }

    pub fn remaining(&self) -> usize {
        self.config
            .max_messages
            .saturating_sub(self.session.message_count())
    }

    pub fn remaining_label(&self) -> String {
        remaining_label(self.remaining())
    }
}

/// "N messages remaining", singular at exactly one
pub fn remaining_label(remaining: usize) -> String {
    let plural = if remaining == 1 { "" } else { "s" };
    format!("{remaining} message{plural} remaining")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchange(controller: &mut ChatController, text: &str) -> Resolution {
        match controller.submit(text) {
            Submission::Dispatch { .. } => controller.resolve(Ok(format!("re: {text}"))),
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    #[test]
    fn test_accepted_submit_records_turn_and_types() {
        let mut controller = ChatController::default();
        let submission = controller.submit("  how do I ask for a raise?  ");

        let Submission::Dispatch { message, request } = submission else {
            panic!("expected dispatch");
        };
        assert_eq!(message, "how do I ask for a raise?");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(controller.session().message_count(), 1);
        assert!(controller.session().is_typing());
    }

    #[test]
    fn test_empty_and_whitespace_are_inert() {
        let mut controller = ChatController::default();
        assert_eq!(controller.submit(""), Submission::Ignored(Ignored::Empty));
        assert_eq!(controller.submit(" \t\n "), Submission::Ignored(Ignored::Empty));
        assert_eq!(controller.session().message_count(), 0);
        assert!(controller.session().history().is_empty());
    }

    #[test]
    fn test_submit_while_typing_is_inert() {
        let mut controller = ChatController::default();
        controller.submit("first");
        assert_eq!(controller.submit("second"), Submission::Ignored(Ignored::Typing));
        assert_eq!(controller.session().message_count(), 1);
        assert_eq!(controller.session().history().len(), 1);
    }

    #[test]
    fn test_counting_up_to_the_cap() {
        let mut controller = ChatController::default();
        for n in 1..=4 {
            let resolution = exchange(&mut controller, &format!("msg {n}"));
            assert_eq!(controller.session().message_count(), n);
            assert!(matches!(resolution, Resolution::Replied { limit_pending: false, .. }));
        }

        let last = exchange(&mut controller, "msg 5");
        assert!(matches!(last, Resolution::Replied { limit_pending: true, .. }));
        assert_eq!(controller.session().message_count(), 5);
        // Still enabled until the delayed transition runs
        assert!(!controller.session().is_disabled());
    }

    #[test]
    fn test_sixth_submit_short_circuits() {
        let mut controller = ChatController::default();
        for n in 1..=5 {
            exchange(&mut controller, &format!("msg {n}"));
        }
        let history_len = controller.session().history().len();

        assert_eq!(controller.submit("one more"), Submission::LimitReached);
        assert!(controller.session().is_disabled());
        assert_eq!(controller.session().message_count(), 5);
        assert_eq!(controller.session().history().len(), history_len);

        // Delayed transition arriving afterwards is a no-op
        assert!(!controller.reach_limit());
    }

    #[test]
    fn test_failure_disables_with_notice() {
        let mut controller = ChatController::default();
        controller.submit("hello");
        let resolution = controller.resolve(Err(ChatFailure::RateLimited));

        assert_eq!(
            resolution,
            Resolution::Failed {
                failure: ChatFailure::RateLimited,
                notice: NoticeKind::OutOfFunding,
            }
        );
        assert!(controller.session().is_disabled());
        assert!(!controller.session().is_typing());
        assert_eq!(controller.submit("again"), Submission::Ignored(Ignored::Disabled));
    }

    #[test]
    fn test_nth_request_replays_everything_before_it() {
        let mut controller = ChatController::default();
        exchange(&mut controller, "a");
        exchange(&mut controller, "b");

        let Submission::Dispatch { request, .. } = controller.submit("c") else {
            panic!("expected dispatch");
        };
        let contents: Vec<_> = request.messages.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, ["a", "re: a", "b", "re: b", "c"]);
    }

    #[test]
    fn test_enter_gate() {
        let mut controller = ChatController::default();
        assert!(controller.accepts_enter());
        controller.submit("x");
        assert!(!controller.accepts_enter());
        controller.resolve(Err(ChatFailure::Api { status: 500 }));
        assert!(!controller.accepts_enter());
    }

    #[test]
    fn test_remaining_labels() {
        assert_eq!(remaining_label(5), "5 messages remaining");
        assert_eq!(remaining_label(1), "1 message remaining");
        assert_eq!(remaining_label(0), "0 messages remaining");

        let mut controller = ChatController::default();
        for n in 1..=4 {
            exchange(&mut controller, &format!("m{n}"));
        }
        assert_eq!(controller.remaining_label(), "1 message remaining");
    }
}
