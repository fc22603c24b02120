//! Home page: hero plus the riddle entry point.

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::session::Theme;
use crate::ui::components::{riddle_error_script, Layout, RiddleModal};

/// Riddle modal state when the modal is open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RiddleState {
    pub error: Option<String>,
    pub answer: String,
}

#[derive(Props, Clone, PartialEq)]
pub struct HomePageProps {
    pub theme: Theme,
    pub site: SiteConfig,
    #[props(default)]
    pub riddle: Option<RiddleState>,
}

#[component]
pub fn HomePage(props: HomePageProps) -> Element {
    let site = props.site;
    let scripts = props
        .riddle
        .as_ref()
        .and_then(|r| r.error.as_ref())
        .map(|_| riddle_error_script());

    rsx! {
        Layout {
            title: "Home".to_string(),
            nav_active: "home".to_string(),
            theme: props.theme,
            path: "/".to_string(),
            scripts: scripts,

            section { class: "hero",
                div {
                    p { class: "muted", "Hello, I'm" }
                    h1 { "{site.owner_name}" }
                    h2 { "{site.headline}" }
                    div { class: "hero-actions",
                        a {
                            href: "{site.resume_url}",
                            role: "button",
                            target: "_blank",
                            rel: "noopener",
                            "Resume"
                        }
                        a { href: "/about#contact", role: "button", class: "secondary outline", "Contact" }
                    }
                }
                img { src: "{site.profile_image}", alt: "{site.owner_name}" }
            }
            a { class: "riddle-link", href: "/?riddle", title: "?", "π" }

            if let Some(riddle) = props.riddle {
                RiddleModal { error: riddle.error, answer: riddle.answer }
            }
        }
    }
}
