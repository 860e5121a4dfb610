// crates/trustybot-widget/src/lib.rs
// TrustyBot chat widget: session rules, failure taxonomy, and the async driver
// shared by the browser app and the terminal client

pub mod backend;
pub mod controller;
pub mod endpoint;
pub mod failure;
pub mod notice;
pub mod panel;
pub mod reveal;
pub mod schedule;
pub mod session;
pub mod widget;

pub use backend::{ChatBackend, HttpBackend};
pub use controller::{
    ChatController, Ignored, LIMIT_NOTICE_DELAY, Resolution, SCROLL_SETTLE_DELAY, Submission,
    WidgetConfig, remaining_label,
};
pub use failure::ChatFailure;
pub use notice::NoticeKind;
pub use panel::PanelState;
pub use reveal::{RevealConfig, RevealTracker, ScheduledReveal, Sighting};
pub use schedule::Scheduler;
#[cfg(feature = "tokio")]
pub use schedule::TokioScheduler;
pub use session::{MAX_MESSAGES, Session};
pub use widget::{ChatWidget, Entry, EntryKind, ScrollTarget, SendOutcome, WidgetView};
