// crates/trustybot-app/src/lib.rs
// TrustyBot - Leptos WASM frontend (CSR)

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod panel;
pub mod reveal;
pub mod schedule;
pub mod view;

pub use panel::ChatbotPanel;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    // Widget crates log through tracing's `log` bridge
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("TrustyBot starting...");

    leptos::mount::mount_to_body(App);

    if let Err(e) = reveal::observe_animated(trustybot_widget::RevealConfig::default()) {
        log::warn!("scroll reveal disabled: {:?}", e);
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! { <ChatbotPanel /> }
}
