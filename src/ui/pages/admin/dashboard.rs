use dioxus::prelude::*;

use super::{
    tab_href, AboutManager, AboutPanel, BlogManager, BlogPanel, ContactManager, ContactPanel,
    ProjectManager, ProjectPanel,
};
use crate::forms::AdminTab;
use crate::session::Theme;
use crate::ui::components::Layout;
use crate::web::ADMIN_ROUTE;

/// The active tab together with the data it renders.
#[derive(Clone, Debug, PartialEq)]
pub enum AdminPanel {
    Blogs(BlogPanel),
    Projects(ProjectPanel),
    About(AboutPanel),
    Contacts(ContactPanel),
}

impl AdminPanel {
    pub fn tab(&self) -> AdminTab {
        match self {
            AdminPanel::Blogs(_) => AdminTab::Blogs,
            AdminPanel::Projects(_) => AdminTab::Projects,
            AdminPanel::About(_) => AdminTab::About,
            AdminPanel::Contacts(_) => AdminTab::Contacts,
        }
    }
}

#[component]
pub fn DashboardPage(theme: Theme, panel: AdminPanel) -> Element {
    let active = panel.tab();
    let path = tab_href(active);
    let logout = format!("{ADMIN_ROUTE}/logout");
    let tabs: Vec<(String, &'static str, &'static str)> = AdminTab::ALL
        .iter()
        .map(|tab| {
            let class = if *tab == active { "active" } else { "secondary" };
            (tab_href(*tab), tab.label(), class)
        })
        .collect();

    let content = match panel {
        AdminPanel::Blogs(panel) => rsx! { BlogManager { panel: panel } },
        AdminPanel::Projects(panel) => rsx! { ProjectManager { panel: panel } },
        AdminPanel::About(panel) => rsx! { AboutManager { panel: panel } },
        AdminPanel::Contacts(panel) => rsx! { ContactManager { panel: panel } },
    };

    rsx! {
        Layout {
            title: "Admin Dashboard".to_string(),
            nav_active: String::new(),
            theme: theme,
            path: path,

            div { class: "admin-header",
                h1 { "Admin Dashboard" }
                form { method: "post", action: "{logout}",
                    button { r#type: "submit", class: "secondary outline", "Logout" }
                }
            }
            nav { class: "admin-tabs",
                for (href, label, class) in tabs.iter() {
                    a { href: "{href}", class: *class, "{label}" }
                }
            }
            {content}
        }
    }
}
