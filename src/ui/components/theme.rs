//! Light/dark theme toggle.
//!
//! The preference lives in the `theme` cookie and the server renders
//! `data-theme` directly, so the toggle is a plain form post with no script.

use dioxus::prelude::*;

use crate::session::Theme;

#[component]
pub fn ThemeToggle(theme: Theme, next: String) -> Element {
    let (icon, label) = match theme {
        Theme::Dark => ("☀", "Switch to light theme"),
        Theme::Light => ("☾", "Switch to dark theme"),
    };

    rsx! {
        form { class: "theme-toggle", method: "post", action: "/theme",
            input { r#type: "hidden", name: "next", value: "{next}" }
            button {
                r#type: "submit",
                class: "secondary outline",
                title: label,
                "aria-label": label,
                "{icon}"
            }
        }
    }
}
