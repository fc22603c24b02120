//! The page behind the riddle.

use dioxus::prelude::*;

use crate::session::Theme;
use crate::ui::components::Layout;

#[component]
pub fn HiddenPage(theme: Theme) -> Element {
    rsx! {
        Layout {
            title: "Second Life".to_string(),
            nav_active: String::new(),
            theme: theme,
            path: "/hidden".to_string(),

            section { class: "hidden-page",
                h1 { lang: "ja", "セカンドライフ" }
                p { "Second Life Unlocked" }
                a { href: "/", role: "button", class: "secondary outline", "Back Home" }
            }
        }
    }
}
