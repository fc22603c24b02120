//! Site navigation bar.

use dioxus::prelude::*;

/// Navigation links for the main menu. The admin panel is deliberately absent.
const NAV_LINKS: &[(&str, &str, &str)] = &[
    ("home", "Home", "/"),
    ("about", "About", "/about"),
    ("blog", "Blog", "/blog"),
    ("projects", "Projects", "/projects"),
];

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "home", "blog")
    pub active: String,
}

#[component]
pub fn Nav(props: NavProps) -> Element {
    rsx! {
        nav {
            ul {
                li {
                    a { class: "brand", href: "/", "Portfolio" }
                }
            }
            ul {
                for (id, label, href) in NAV_LINKS.iter() {
                    li {
                        if *id == props.active.as_str() {
                            a {
                                href: *href,
                                "aria-current": "page",
                                strong { "{label}" }
                            }
                        } else {
                            a {
                                href: *href,
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
