use dioxus::prelude::*;

use super::{delete_action, tab_href, tab_item_href};
use crate::forms::AdminTab;
use crate::models::{date_and_time, ContactSubmission};
use crate::ui::components::{ConfirmDelete, ErrorBanner};

const TAB: AdminTab = AdminTab::Contacts;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactPanel {
    pub submissions: Vec<ContactSubmission>,
    pub confirm_delete: Option<ContactSubmission>,
    pub error: Option<String>,
}

/// Read-only list; the only write is delete.
#[component]
pub fn ContactManager(panel: ContactPanel) -> Element {
    rsx! {
        section { class: "manager",
            h2 { "Contact Submissions" }
            ErrorBanner { message: panel.error }
            if let Some(submission) = panel.confirm_delete {
                ConfirmDelete {
                    question: "Are you sure you want to delete this submission?".to_string(),
                    subject: format!("{} <{}>", submission.name, submission.email),
                    action: delete_action(TAB, &submission.id),
                    cancel_href: tab_href(TAB),
                }
            }
            if panel.submissions.is_empty() {
                p { class: "muted", "No contact submissions yet." }
            }
            for submission in panel.submissions.iter() {
                SubmissionRow { submission: submission.clone() }
            }
        }
    }
}

#[component]
fn SubmissionRow(submission: ContactSubmission) -> Element {
    let mailto = format!("mailto:{}", submission.email);
    let submitted = submission
        .created_at
        .as_ref()
        .map(date_and_time)
        .unwrap_or_default();
    let delete = tab_item_href(TAB, "delete", &submission.id);

    rsx! {
        article { class: "item-card",
            div {
                h4 { "{submission.name}" }
                a { href: "{mailto}", "{submission.email}" }
                p { "{submission.message}" }
                small { "Submitted {submitted}" }
            }
            div { class: "item-actions",
                a { href: "{delete}", role: "button", class: "contrast", "Delete" }
            }
        }
    }
}
