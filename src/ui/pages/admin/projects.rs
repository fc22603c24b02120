use dioxus::prelude::*;

use super::{delete_action, form_action, tab_href, tab_item_href};
use crate::client::resolve_image_url;
use crate::forms::{AdminTab, ProjectForm};
use crate::models::Project;
use crate::ui::components::{ConfirmDelete, ErrorBanner};

const TAB: AdminTab = AdminTab::Projects;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectPanel {
    pub projects: Vec<Project>,
    pub form: Option<ProjectForm>,
    pub confirm_delete: Option<Project>,
    pub error: Option<String>,
    /// Base for relative image paths in previews
    pub api_base: String,
}

#[component]
pub fn ProjectManager(panel: ProjectPanel) -> Element {
    let new_href = tab_item_href(TAB, "new", "1");

    rsx! {
        section { class: "manager",
            div { class: "admin-header",
                h2 { "Projects" }
                if panel.form.is_none() {
                    a { href: "{new_href}", role: "button", "+ New Project" }
                }
            }
            ErrorBanner { message: panel.error }
            if let Some(project) = panel.confirm_delete {
                ConfirmDelete {
                    question: "Are you sure you want to delete this project?".to_string(),
                    subject: project.title.clone(),
                    action: delete_action(TAB, &project.id),
                    cancel_href: tab_href(TAB),
                }
            }
            if let Some(form) = panel.form {
                ProjectEditor {
                    preview: resolve_image_url(&panel.api_base, &form.image_url),
                    form: form,
                }
            }
            if panel.projects.is_empty() {
                p { class: "muted", "No projects yet. Add your first one!" }
            }
            for project in panel.projects.iter() {
                ProjectRow {
                    image: resolve_image_url(&panel.api_base, &project.image_url),
                    project: project.clone(),
                }
            }
        }
    }
}

#[component]
fn ProjectEditor(form: ProjectForm, preview: Option<String>) -> Element {
    let editing = form.editing_id().is_some();
    let heading = if editing { "Edit Project" } else { "New Project" };
    let submit = if editing { "Update Project" } else { "Create Project" };
    let action = form_action(TAB);
    let cancel = tab_href(TAB);

    rsx! {
        article {
            header { h3 { "{heading}" } }
            form { method: "post", action: "{action}", enctype: "multipart/form-data",
                input { r#type: "hidden", name: "id", value: "{form.id}" }
                label {
                    "Title"
                    input { r#type: "text", name: "title", value: "{form.title}", required: true }
                }
                label {
                    "Description"
                    textarea { name: "description", rows: "4", required: true, "{form.description}" }
                }
                label {
                    "GitHub Link"
                    input { r#type: "url", name: "github_link", value: "{form.github_link}", required: true }
                }
                label {
                    "Demo Link (optional)"
                    input { r#type: "url", name: "demo_link", value: "{form.demo_link}" }
                }
                if let Some(src) = preview {
                    img { class: "image-preview", src: "{src}", alt: "Current image" }
                }
                // Uploaded images are stored as relative paths, which a url input rejects
                label {
                    "Image URL"
                    input { r#type: "text", name: "image_url", value: "{form.image_url}" }
                }
                // Last, so a body cut off inside the file keeps every text field
                label {
                    "Image"
                    input { r#type: "file", name: "file", accept: "image/*" }
                    small { "JPEG, PNG, GIF or WebP, up to 5MB. Leave empty to keep the current image." }
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
fn ProjectRow(project: Project, image: Option<String>) -> Element {
    let edit = tab_item_href(TAB, "edit", &project.id);
    let delete = tab_item_href(TAB, "delete", &project.id);

    rsx! {
        article { class: "item-card",
            if let Some(src) = image {
                img { class: "image-preview", src: "{src}", alt: "{project.title}" }
            }
            div {
                h4 { "{project.title}" }
                p { "{project.description}" }
                small { "{project.github_link}" }
            }
            div { class: "item-actions",
                a { href: "{edit}", role: "button", class: "secondary", "Edit" }
                a { href: "{delete}", role: "button", class: "contrast", "Delete" }
            }
        }
    }
}
