// crates/trustybot-app/src/view.rs
// WidgetView over Leptos signals

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use trustybot_widget::{Entry, ScrollTarget, WidgetView};

/// Gap kept above the last user message when scrolling to it
pub const SCROLL_TOP_PADDING: i32 = 20;

/// Everything the panel renders. All fields are arena handles, so the
/// struct is `Copy` and can be captured by any view closure.
#[derive(Clone, Copy)]
pub struct SignalView {
    /// (render key, entry)
    pub entries: RwSignal<Vec<(usize, Entry)>>,
    pub typing: RwSignal<bool>,
    pub input: RwSignal<String>,
    /// Placeholder shown once the input is locked
    pub locked: RwSignal<Option<String>>,
    pub counter: RwSignal<String>,
    pub messages_ref: NodeRef<html::Div>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            typing: RwSignal::new(false),
            input: RwSignal::new(String::new()),
            locked: RwSignal::new(None),
            counter: RwSignal::new(String::new()),
            messages_ref: NodeRef::new(),
        }
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetView for SignalView {
    fn append(&self, entry: &Entry) {
        self.entries.update(|list| {
            let key = list.len();
            list.push((key, entry.clone()));
        });
    }

    fn show_typing(&self) {
        self.typing.set(true);
    }

    fn hide_typing(&self) {
        self.typing.set(false);
    }

    fn clear_input(&self) {
        self.input.set(String::new());
    }

    fn scroll_to(&self, target: ScrollTarget) {
        let Some(container) = self.messages_ref.get_untracked() else {
            return;
        };
        match target {
            ScrollTarget::Bottom => container.set_scroll_top(container.scroll_height()),
            ScrollTarget::LastUserMessage => {
                let last = container
                    .query_selector_all(".user-message")
                    .ok()
                    .and_then(|nodes| nodes.item(nodes.length().checked_sub(1)?))
                    .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok());
                if let Some(message) = last {
                    container.set_scroll_top(user_scroll_top(message.offset_top()));
                }
            }
        }
    }

    fn lock_input(&self, placeholder: &str) {
        self.locked.set(Some(placeholder.to_string()));
    }

    fn set_counter(&self, label: &str) {
        self.counter.set(label.to_string());
    }
}

/// scrollTop that puts a message `SCROLL_TOP_PADDING` below the list top
pub fn user_scroll_top(offset_top: i32) -> i32 {
    (offset_top - SCROLL_TOP_PADDING).max(0)
}
