use dioxus::prelude::*;

use super::form_action;
use crate::forms::{AboutForm, AdminTab};
use crate::ui::components::ErrorBanner;

/// The about section is a single record, so the editor is always open:
/// pre-filled when a record exists, blank (create) otherwise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AboutPanel {
    pub form: AboutForm,
    pub error: Option<String>,
}

#[component]
pub fn AboutManager(panel: AboutPanel) -> Element {
    let form = panel.form;
    let submit = if form.editing_id().is_some() {
        "Update About"
    } else {
        "Create About"
    };
    let action = form_action(AdminTab::About);

    rsx! {
        section { class: "manager",
            h2 { "About Section" }
            ErrorBanner { message: panel.error }
            form { method: "post", action: "{action}",
                input { r#type: "hidden", name: "id", value: "{form.id}" }
                label {
                    "Bio"
                    textarea { name: "bio", rows: "6", required: true, "{form.bio}" }
                }
                label {
                    "Skills (one per line)"
                    textarea { name: "skills", rows: "6", "{form.skills}" }
                }
                label {
                    "Hobbies (one per line)"
                    textarea { name: "hobbies", rows: "4", "{form.hobbies}" }
                }
                button { r#type: "submit", "{submit}" }
            }
        }
    }
}
