//! Delete confirmation used by every admin manager.

use dioxus::prelude::*;

/// Second step of a delete. Only this form's POST (with `confirm=yes`)
/// actually deletes; Cancel goes back to the manager tab.
#[component]
pub fn ConfirmDelete(
    question: String,
    subject: String,
    action: String,
    cancel_href: String,
) -> Element {
    rsx! {
        article { class: "confirm-delete",
            p { strong { "{question}" } }
            p { class: "muted", "{subject}" }
            form { method: "post", action: "{action}",
                input { r#type: "hidden", name: "confirm", value: "yes" }
                div { class: "grid",
                    button { r#type: "submit", class: "contrast", "Delete" }
                    a { href: "{cancel_href}", role: "button", class: "secondary outline", "Cancel" }
                }
            }
        }
    }
}
