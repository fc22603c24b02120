//! Inline error and success banners.

use dioxus::prelude::*;

/// Red banner; renders nothing when there is no message.
#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            div { class: "error-message", role: "alert", "{message}" }
        }
    }
}

/// Green banner with an element id so a page script can hide it.
#[component]
pub fn SuccessBanner(id: String, message: String) -> Element {
    rsx! {
        div { id: "{id}", class: "success-message", role: "status", "{message}" }
    }
}

/// Script that removes the element with `id` after `delay_ms`.
pub fn dismiss_script(id: &str, delay_ms: u64) -> String {
    format!(
        "setTimeout(function() {{ var el = document.getElementById('{id}'); if (el) el.remove(); }}, {delay_ms});"
    )
}
