// crates/trustybot-widget/src/widget.rs
// Async driver: runs controller transitions against a backend and a view

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, info, warn};
use trustybot_types::Turn;

use crate::backend::ChatBackend;
use crate::controller::{ChatController, Ignored, Resolution, Submission, WidgetConfig};
use crate::notice::NoticeKind;
use crate::panel::PanelState;
use crate::schedule::Scheduler;

// ═══════════════════════════════════════
// VIEW SURFACE
// ═══════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    User,
    Assistant,
    Notice(NoticeKind),
}

/// One rendered item in the message list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    pub text: String,
}

impl Entry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Assistant,
            text: text.into(),
        }
    }

    pub fn notice(kind: NoticeKind) -> Self {
        Self {
            kind: EntryKind::Notice(kind),
            text: kind.body().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Bottom,
    /// Most recent user message near the top of the list
    LastUserMessage,
}

/// What a renderer must provide. Methods take `&self`; renderers keep
/// their own interior mutability (signals, cells).
pub trait WidgetView {
    fn append(&self, entry: &Entry);
    fn show_typing(&self);
    fn hide_typing(&self);
    fn clear_input(&self);
    fn scroll_to(&self, target: ScrollTarget);
    /// Disable the input and send control, showing `placeholder`
    fn lock_input(&self, placeholder: &str);
    fn set_counter(&self, label: &str);
}

// ═══════════════════════════════════════
// DRIVER
// ═══════════════════════════════════════

/// Result of one `ChatWidget::send`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Ignored(Ignored),
    /// Cap was already used up; limit notice shown, nothing sent
    LimitReached,
    /// Reply rendered. `limit_pending` means the limit notice is scheduled.
    Replied { limit_pending: bool },
    Failed(NoticeKind),
}

struct Inner<B, V, S> {
    controller: RefCell<ChatController>,
    panel: Cell<PanelState>,
    backend: B,
    view: V,
    scheduler: S,
}

/// Cheap cloneable handle; clones share one session
pub struct ChatWidget<B, V, S> {
    inner: Rc<Inner<B, V, S>>,
}

impl<B, V, S> Clone for ChatWidget<B, V, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<B, V, S> ChatWidget<B, V, S>
where
    B: ChatBackend + 'static,
    V: WidgetView + 'static,
    S: Scheduler + 'static,
{
    pub fn new(backend: B, view: V, scheduler: S) -> Self {
        Self::with_config(WidgetConfig::default(), backend, view, scheduler)
    }

    pub fn with_config(config: WidgetConfig, backend: B, view: V, scheduler: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                controller: RefCell::new(ChatController::new(config)),
                panel: Cell::new(PanelState::default()),
                backend,
                view,
                scheduler,
            }),
        }
    }

    /// Initial render
    pub fn mount(&self) {
        self.refresh_counter();
    }

    pub fn view(&self) -> &V {
        &self.inner.view
    }

    pub fn backend(&self) -> &B {
        &self.inner.backend
    }

    pub fn message_count(&self) -> usize {
        self.inner.controller.borrow().session().message_count()
    }

    pub fn is_typing(&self) -> bool {
        self.inner.controller.borrow().session().is_typing()
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.controller.borrow().session().is_disabled()
    }

    pub fn history(&self) -> Vec<Turn> {
        self.inner.controller.borrow().session().history().to_vec()
    }

    pub fn remaining_label(&self) -> String {
        self.inner.controller.borrow().remaining_label()
    }

    /// Submit one message. Always ends with a counter refresh.
    pub async fn send(&self, text: &str) -> SendOutcome {
        let outcome = self.run_submit(text).await;
        self.refresh_counter();
        outcome
    }

    /// Enter key: ignored while typing or disabled
    pub async fn press_enter(&self, text: &str) -> Option<SendOutcome> {
        if !self.inner.controller.borrow().accepts_enter() {
            return None;
        }
        Some(self.send(text).await)
    }

    async fn run_submit(&self, text: &str) -> SendOutcome {
        let submission = self.inner.controller.borrow_mut().submit(text);

        let request = match submission {
            Submission::Ignored(reason) => {
                debug!(?reason, "submit ignored");
                return SendOutcome::Ignored(reason);
            }
            Submission::LimitReached => {
                info!("message cap reached");
                self.show_notice(NoticeKind::LimitReached);
                return SendOutcome::LimitReached;
            }
            Submission::Dispatch { message, request } => {
                let view = &self.inner.view;
                view.append(&Entry::user(message));
                view.clear_input();
                self.scroll_later(ScrollTarget::Bottom);
                view.show_typing();
                self.scroll_later(ScrollTarget::Bottom);
                request
            }
        };

        debug!(turns = request.messages.len(), "awaiting reply");
        let result = self.inner.backend.complete(&request).await;
        let resolution = self.inner.controller.borrow_mut().resolve(result);
        self.inner.view.hide_typing();

        match resolution {
            Resolution::Replied {
                reply,
                limit_pending,
            } => {
                self.inner.view.append(&Entry::assistant(reply));
                self.scroll_later(ScrollTarget::LastUserMessage);
                if limit_pending {
                    self.limit_later();
                }
                SendOutcome::Replied { limit_pending }
            }
            Resolution::Failed { failure, notice } => {
                warn!(kind = failure.kind(), error = %failure, "chat request failed");
                self.show_notice(notice);
                SendOutcome::Failed(notice)
            }
        }
    }

    fn show_notice(&self, kind: NoticeKind) {
        let view = &self.inner.view;
        view.lock_input(kind.placeholder());
        view.append(&Entry::notice(kind));
        self.scroll_later(ScrollTarget::Bottom);
    }

    fn refresh_counter(&self) {
        let label = self.remaining_label();
        self.inner.view.set_counter(&label);
    }

    fn scroll_later(&self, target: ScrollTarget) {
        let widget = self.clone();
        let delay = self.inner.controller.borrow().config().scroll_settle;
        self.inner.scheduler.defer(
            delay,
            Box::pin(async move {
                widget.inner.view.scroll_to(target);
            }),
        );
    }

    fn limit_later(&self) {
        let widget = self.clone();
        let delay = self.inner.controller.borrow().config().limit_notice_delay;
        self.inner.scheduler.defer(
            delay,
            Box::pin(async move {
                let fresh = widget.inner.controller.borrow_mut().reach_limit();
                if fresh {
                    info!("message cap reached");
                    widget.show_notice(NoticeKind::LimitReached);
                }
            }),
        );
    }

    // ═══════════════════════════════════════
    // PANEL
    // ═══════════════════════════════════════

    pub fn panel(&self) -> PanelState {
        self.inner.panel.get()
    }

    /// Header click; returns the new state
    pub fn toggle_panel(&self) -> PanelState {
        let next = self.inner.panel.get().toggle();
        self.inner.panel.set(next);
        next
    }

    /// Expand button; returns the new state
    pub fn toggle_expand(&self) -> PanelState {
        let next = self.inner.panel.get().toggle_expand();
        self.inner.panel.set(next);
        next
    }

    /// Whether the input should be focused after a panel transition
    pub fn wants_focus(&self) -> bool {
        self.panel().wants_focus(self.is_disabled())
    }
}
