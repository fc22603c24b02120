//! Riddle modal shown over the home page.

use dioxus::prelude::*;

use super::notice::dismiss_script;
use crate::riddle::{ERROR_CLEAR_MS, QUESTION};

const RIDDLE_ERROR_ID: &str = "riddle-error";

/// Script clearing the wrong-answer message
pub fn riddle_error_script() -> String {
    dismiss_script(RIDDLE_ERROR_ID, ERROR_CLEAR_MS)
}

/// Pico `<dialog open>`; closing is a link back to `/`.
#[component]
pub fn RiddleModal(error: Option<String>, answer: String) -> Element {
    rsx! {
        dialog { class: "riddle-modal", open: true,
            article {
                header {
                    a { href: "/", class: "close", "aria-label": "Close" }
                    strong { "A riddle" }
                }
                p { "{QUESTION}" }
                form { method: "post", action: "/riddle",
                    input {
                        r#type: "text",
                        name: "answer",
                        placeholder: "Your answer",
                        value: "{answer}",
                        autofocus: true,
                        required: true,
                    }
                    if let Some(error) = error {
                        p { id: RIDDLE_ERROR_ID, class: "error-message", "{error}" }
                    }
                    button { r#type: "submit", "Submit" }
                }
            }
        }
    }
}
