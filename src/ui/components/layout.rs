//! Layout component wrapping all pages with Pico CSS and common elements.

use dioxus::prelude::*;

use super::nav::Nav;
use super::theme::ThemeToggle;
use crate::session::Theme;

/// CSS styles for the site (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 16px; }
[data-theme="dark"] {
    --pico-background-color: #0f1115;
    --pico-card-background-color: #171a21;
}
small, .muted { color: var(--pico-muted-color); }
.site-header nav { align-items: center; }
.brand { font-weight: 700; text-decoration: none; }
.theme-toggle { margin: 0; }
.theme-toggle button { margin: 0; padding: 0.25rem 0.6rem; font-size: 0.9rem; }
.error-message { color: var(--pico-del-color); border-left: 3px solid var(--pico-del-color); padding: 0.5rem 1rem; margin-bottom: 1rem; }
.success-message { color: var(--pico-ins-color); border-left: 3px solid var(--pico-ins-color); padding: 0.5rem 1rem; margin-bottom: 1rem; }
/* Home */
.hero { display: grid; grid-template-columns: 1fr auto; gap: 2rem; align-items: center; min-height: 60vh; }
.hero img { width: 240px; height: 240px; object-fit: cover; border-radius: 50%; }
.hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; }
.riddle-link { opacity: 0.35; font-size: 0.8rem; text-decoration: none; }
.riddle-modal form { margin-bottom: 0; }
/* About */
.skill-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; padding: 0; list-style: none; }
.skill-tags li { list-style: none; padding: 0.2rem 0.7rem; border-radius: 1rem; background: var(--pico-secondary-background); color: var(--pico-secondary-inverse); }
/* Blog & projects */
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1rem; }
.project-card img { width: 100%; aspect-ratio: 16 / 9; object-fit: cover; border-radius: var(--pico-border-radius); }
.project-links { display: flex; gap: 1rem; }
.blog-content p { white-space: pre-wrap; }
/* Hidden */
.hidden-page { text-align: center; padding: 4rem 0; }
.hidden-page h1 { font-size: 4rem; }
/* Admin */
.admin-header { display: flex; justify-content: space-between; align-items: center; }
.admin-tabs { display: flex; gap: 0.5rem; flex-wrap: wrap; margin-bottom: 1.5rem; }
.admin-tabs a { padding: 0.4rem 0.9rem; border-radius: var(--pico-border-radius); text-decoration: none; }
.admin-tabs a.active { background: var(--pico-primary-background); color: var(--pico-primary-inverse); }
.item-card { display: flex; justify-content: space-between; gap: 1rem; align-items: flex-start; }
.item-actions { display: flex; gap: 0.5rem; }
.item-actions form { margin: 0; }
.item-actions a, .item-actions button { margin: 0; padding: 0.3rem 0.8rem; font-size: 0.9rem; }
.confirm-delete { border: 1px solid var(--pico-del-color); }
.image-preview { max-width: 200px; border-radius: var(--pico-border-radius); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Current theme, drives the toggle label
    pub theme: Theme,
    /// Path the theme toggle returns to
    pub path: String,
    /// Page content
    pub children: Element,
    /// Optional additional scripts to include
    #[props(default)]
    pub scripts: Option<String>,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("PORTFOLIO_VERSION");
    let year = chrono::Utc::now().format("%Y").to_string();

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} | Portfolio" }
            link {
                rel: "stylesheet",
                href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css"
            }
            style { {CUSTOM_STYLES} }
        }
        body {
            header { class: "container site-header",
                Nav { active: props.nav_active.clone() }
            }
            main { class: "container",
                {props.children}
            }
            footer {
                class: "container",
                style: "display:flex;justify-content:space-between;align-items:center;",
                small { "© {year} Portfolio · v{version}" }
                ThemeToggle { theme: props.theme, next: props.path.clone() }
            }
            if let Some(scripts) = props.scripts {
                script { dangerous_inner_html: "{scripts}" }
            }
        }
    }
}
