//! Admin panel pages: login form, dashboard shell and one manager per
//! resource.
//!
//! Every manager follows the same shape: list of records, optional editor
//! form (new or pre-filled), optional delete confirmation, error banner.
//! Links carry the state in the query string (`?tab=blogs&edit=<id>`) so a
//! reload shows the same view.

mod about;
mod blogs;
mod contacts;
mod dashboard;
mod login;
mod projects;

pub use about::{AboutManager, AboutPanel};
pub use blogs::{BlogManager, BlogPanel};
pub use contacts::{ContactManager, ContactPanel};
pub use dashboard::{AdminPanel, DashboardPage};
pub use login::LoginPage;
pub use projects::{ProjectManager, ProjectPanel};

use crate::forms::AdminTab;
use crate::web::ADMIN_ROUTE;

/// `/admin-secret-panel?tab=<tab>`
pub fn tab_href(tab: AdminTab) -> String {
    format!("{ADMIN_ROUTE}?tab={}", tab.as_str())
}

/// `/admin-secret-panel?tab=<tab>&<key>=<id>`
fn tab_item_href(tab: AdminTab, key: &str, id: &str) -> String {
    format!(
        "{ADMIN_ROUTE}?tab={}&{key}={}",
        tab.as_str(),
        urlencoding::encode(id)
    )
}

/// Create/update target: `/admin-secret-panel/<tab>`
fn form_action(tab: AdminTab) -> String {
    format!("{ADMIN_ROUTE}/{}", tab.as_str())
}

/// `/admin-secret-panel/<tab>/<id>/delete`
fn delete_action(tab: AdminTab, id: &str) -> String {
    format!(
        "{ADMIN_ROUTE}/{}/{}/delete",
        tab.as_str(),
        urlencoding::encode(id)
    )
}
