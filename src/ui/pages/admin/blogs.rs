use dioxus::prelude::*;

use super::{delete_action, form_action, tab_href, tab_item_href};
use crate::forms::{AdminTab, BlogForm};
use crate::models::{long_date, BlogPost};
use crate::ui::components::{ConfirmDelete, ErrorBanner};

const TAB: AdminTab = AdminTab::Blogs;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogPanel {
    pub posts: Vec<BlogPost>,
    /// Editor contents; `None` hides the editor
    pub form: Option<BlogForm>,
    pub confirm_delete: Option<BlogPost>,
    pub error: Option<String>,
}

#[component]
pub fn BlogManager(panel: BlogPanel) -> Element {
    let new_href = tab_item_href(TAB, "new", "1");

    rsx! {
        section { class: "manager",
            div { class: "admin-header",
                h2 { "Blog Posts" }
                if panel.form.is_none() {
                    a { href: "{new_href}", role: "button", "+ New Post" }
                }
            }
            ErrorBanner { message: panel.error }
            if let Some(post) = panel.confirm_delete {
                ConfirmDelete {
                    question: "Are you sure you want to delete this blog post?".to_string(),
                    subject: post.title.clone(),
                    action: delete_action(TAB, &post.id),
                    cancel_href: tab_href(TAB),
                }
            }
            if let Some(form) = panel.form {
                BlogEditor { form: form }
            }
            if panel.posts.is_empty() {
                p { class: "muted", "No blog posts yet. Create your first one!" }
            }
            for post in panel.posts.iter() {
                BlogRow { post: post.clone() }
            }
        }
    }
}

#[component]
fn BlogEditor(form: BlogForm) -> Element {
    let heading = if form.editing_id().is_some() {
        "Edit Post"
    } else {
        "New Post"
    };
    let submit = if form.editing_id().is_some() {
        "Update Post"
    } else {
        "Create Post"
    };
    let action = form_action(TAB);
    let cancel = tab_href(TAB);

    rsx! {
        article {
            header { h3 { "{heading}" } }
            form { method: "post", action: "{action}",
                input { r#type: "hidden", name: "id", value: "{form.id}" }
                label {
                    "Title"
                    input { r#type: "text", name: "title", value: "{form.title}", required: true }
                }
                label {
                    "Excerpt"
                    textarea { name: "excerpt", rows: "2", required: true, "{form.excerpt}" }
                }
                label {
                    "Content"
                    textarea { name: "content", rows: "12", required: true, "{form.content}" }
                }
                div { class: "grid",
                    button { r#type: "submit", "{submit}" }
                    a { href: "{cancel}", role: "button", class: "secondary outline", "Cancel" }
                }
            }
        }
    }
}

#[component]
fn BlogRow(post: BlogPost) -> Element {
    let date = post.created_at.as_ref().map(long_date).unwrap_or_default();
    let edit = tab_item_href(TAB, "edit", &post.id);
    let delete = tab_item_href(TAB, "delete", &post.id);

    rsx! {
        article { class: "item-card",
            div {
                h4 { "{post.title}" }
                p { "{post.excerpt}" }
                small { "{date}" }
            }
            div { class: "item-actions",
                a { href: "{edit}", role: "button", class: "secondary", "Edit" }
                a { href: "{delete}", role: "button", class: "contrast", "Delete" }
            }
        }
    }
}
