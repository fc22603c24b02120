//! Projects grid.

use dioxus::prelude::*;

use crate::client::resolve_image_url;
use crate::models::Project;
use crate::session::Theme;
use crate::ui::components::{ErrorBanner, Layout};

#[derive(Props, Clone, PartialEq)]
pub struct ProjectsPageProps {
    pub theme: Theme,
    pub projects: Vec<Project>,
    /// Base for relative image paths
    pub api_base: String,
    #[props(default)]
    pub error: Option<String>,
}

#[component]
pub fn ProjectsPage(props: ProjectsPageProps) -> Element {
    let empty = props.projects.is_empty() && props.error.is_none();

    rsx! {
        Layout {
            title: "Projects".to_string(),
            nav_active: "projects".to_string(),
            theme: props.theme,
            path: "/projects".to_string(),

            h1 { "Projects" }
            ErrorBanner { message: props.error.clone() }
            if empty {
                p { class: "muted", "No projects yet." }
            }
            div { class: "card-grid",
                for project in props.projects.iter() {
                    ProjectCard {
                        image: resolve_image_url(&props.api_base, &project.image_url),
                        project: project.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, image: Option<String>) -> Element {
    let demo = project.demo().map(String::from);

    rsx! {
        article { class: "project-card",
            if let Some(src) = image {
                img { src: "{src}", alt: "{project.title}", loading: "lazy" }
            }
            h3 { "{project.title}" }
            p { "{project.description}" }
            footer { class: "project-links",
                if let Some(demo) = demo {
                    a { href: "{demo}", target: "_blank", rel: "noopener noreferrer", "View Project →" }
                }
                a {
                    href: "{project.github_link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View on GitHub →"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(image_url: &str, demo_link: Option<&str>) -> Project {
        Project {
            id: "p1".into(),
            title: "Portfolio".into(),
            description: "This site".into(),
            image_url: image_url.into(),
            github_link: "https://github.com/u/portfolio".into(),
            demo_link: demo_link.map(String::from),
            ..Default::default()
        }
    }

    fn render(projects: Vec<Project>) -> String {
        dioxus::ssr::render_element(rsx! {
            ProjectsPage {
                theme: Theme::Dark,
                projects: projects,
                api_base: "https://api.example.com".to_string(),
            }
        })
    }

    #[test]
    fn relative_images_resolve_against_api() {
        let html = render(vec![project("/uploads/p1.png", None)]);
        assert!(html.contains(r#"src="https://api.example.com/uploads/p1.png""#));
    }

    #[test]
    fn demo_link_only_when_present() {
        let html = render(vec![project("", None)]);
        assert!(!html.contains("View Project"));
        assert!(html.contains("View on GitHub"));
        assert!(!html.contains("<img"));

        let html = render(vec![project("", Some("https://demo.example.com"))]);
        assert!(html.contains("View Project"));
        assert!(html.contains(r#"href="https://demo.example.com""#));
    }

    #[test]
    fn blank_demo_link_is_hidden() {
        let html = render(vec![project("", Some("   "))]);
        assert!(!html.contains("View Project"));
    }
}
