// crates/trustybot-app/src/panel.rs
// Collapsible chat panel component

use leptos::ev::KeyboardEvent;
use leptos::html;
use leptos::prelude::*;
use trustybot_widget::notice::CONTACT_EMAIL;
use trustybot_widget::{ChatWidget, Entry, EntryKind, HttpBackend};
use wasm_bindgen_futures::spawn_local;

use crate::schedule::BrowserScheduler;
use crate::view::SignalView;

const INPUT_PLACEHOLDER: &str = "Ask TrustyBot anything...";
const GREETING: &str = "Hi, I'm TrustyBot! Ask me anything and I'll give you my most confident advice.";

type BrowserWidget = ChatWidget<HttpBackend, SignalView, BrowserScheduler>;

#[component]
pub fn ChatbotPanel() -> impl IntoView {
    let state = SignalView::new();

    let host = window().location().hostname().unwrap_or_default();
    let backend = HttpBackend::for_host(&host);
    log::info!("TrustyBot endpoint: {}", backend.endpoint());

    let widget: BrowserWidget = ChatWidget::new(backend, state, BrowserScheduler);
    widget.mount();

    let panel = RwSignal::new(widget.panel());
    let input_ref = NodeRef::<html::Input>::new();

    let on_header = {
        let widget = widget.clone();
        move |_| panel.set(widget.toggle_panel())
    };

    let on_expand = {
        let widget = widget.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            panel.set(widget.toggle_expand());
        }
    };

    let on_settled = {
        let widget = widget.clone();
        move |_| {
            if widget.wants_focus()
                && let Some(input) = input_ref.get()
            {
                let _ = input.focus();
            }
        }
    };

    let on_keydown = {
        let widget = widget.clone();
        move |ev: KeyboardEvent| {
            if ev.key() != "Enter" {
                return;
            }
            ev.prevent_default();
            let widget = widget.clone();
            let text = state.input.get_untracked();
            spawn_local(async move {
                widget.press_enter(&text).await;
            });
        }
    };

    let on_send = {
        let widget = widget.clone();
        move |_| {
            let widget = widget.clone();
            let text = state.input.get_untracked();
            spawn_local(async move {
                widget.send(&text).await;
            });
        }
    };

    view! {
        <div id="chatbot" class=move || panel.get().class() on:transitionend=on_settled>
            <div class="chatbot-header" on:click=on_header>
                <div class="chatbot-title">"TrustyBot"</div>
                <span id="messageCounter" class="message-counter">
                    {move || state.counter.get()}
                </span>
                <button class="expand-btn" title="Expand" on:click=on_expand>
                    "⤢"
                </button>
            </div>

            <div id="chatMessages" class="chat-messages" node_ref=state.messages_ref>
                <div class="bot-message">{GREETING}</div>
                <For
                    each=move || state.entries.get()
                    key=|(key, _)| *key
                    children=move |(_, entry)| render_entry(entry)
                />
                <Show when=move || state.typing.get()>
                    <div class="typing-indicator">
                        <div class="typing-dot"></div>
                        <div class="typing-dot"></div>
                        <div class="typing-dot"></div>
                        <span class="typing-text">"TrustyBot is typing..."</span>
                    </div>
                </Show>
            </div>

            <div class="chat-input-container">
                <input
                    id="chatInput"
                    type="text"
                    class="chat-input"
                    node_ref=input_ref
                    placeholder=move || {
                        state.locked.get().unwrap_or_else(|| INPUT_PLACEHOLDER.to_string())
                    }
                    prop:value=move || state.input.get()
                    prop:disabled=move || state.locked.get().is_some()
                    on:input=move |ev| state.input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="send-btn"
                    prop:disabled=move || state.locked.get().is_some()
                    on:click=on_send
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

fn render_entry(entry: Entry) -> AnyView {
    match entry.kind {
        EntryKind::User => view! { <div class="user-message">{entry.text}</div> }.into_any(),
        EntryKind::Assistant => view! { <div class="bot-message">{entry.text}</div> }.into_any(),
        EntryKind::Notice(kind) => {
            let text = match kind.body_parts() {
                Some((before, link, after)) => view! {
                    {before}
                    <a href=format!("mailto:{CONTACT_EMAIL}")>{link}</a>
                    {after}
                }
                .into_any(),
                None => entry.text.into_any(),
            };
            view! {
                <div class=format!("bot-message {}", kind.class())>
                    <strong>{kind.title()}</strong>
                    <br /><br />
                    {text}
                </div>
            }
            .into_any()
        }
    }
}
