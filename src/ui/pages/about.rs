//! About page with the contact form.

use dioxus::prelude::*;

use crate::forms::ContactForm;
use crate::models::AboutSection;
use crate::session::Theme;
use crate::ui::components::{dismiss_script, ErrorBanner, Layout, SuccessBanner};

pub const CONTACT_SENT: &str = "Thank you! Your message has been sent successfully.";
const CONTACT_SENT_ID: &str = "contact-success";
const CONTACT_SENT_MS: u64 = 5000;

/// Contact form state after a submission (or blank on first render).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    pub error: Option<String>,
    pub sent: bool,
}

#[derive(Props, Clone, PartialEq)]
pub struct AboutPageProps {
    pub theme: Theme,
    pub about: Option<AboutSection>,
    #[props(default)]
    pub load_error: Option<String>,
    #[props(default)]
    pub contact: ContactState,
}

#[component]
pub fn AboutPage(props: AboutPageProps) -> Element {
    let not_found = props.about.is_none() && props.load_error.is_none();
    let scripts = props
        .contact
        .sent
        .then(|| dismiss_script(CONTACT_SENT_ID, CONTACT_SENT_MS));

    rsx! {
        Layout {
            title: "About".to_string(),
            nav_active: "about".to_string(),
            theme: props.theme,
            path: "/about".to_string(),
            scripts: scripts,

            h1 { "About Me" }
            ErrorBanner { message: props.load_error.clone() }
            if let Some(about) = props.about {
                AboutDetails { about: about }
            }
            if not_found {
                p { class: "muted", "About section not found" }
            }

            ContactSection { state: props.contact }
        }
    }
}

#[component]
fn AboutDetails(about: AboutSection) -> Element {
    rsx! {
        article {
            p { "{about.bio}" }
            if !about.skills.is_empty() {
                h3 { "Skills" }
                ul { class: "skill-tags",
                    for skill in about.skills.iter() {
                        li { "{skill}" }
                    }
                }
            }
            if !about.hobbies.is_empty() {
                h3 { "Hobbies" }
                ul {
                    for hobby in about.hobbies.iter() {
                        li { "{hobby}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactSection(state: ContactState) -> Element {
    let form = state.form;

    rsx! {
        section { id: "contact",
            h2 { "Get In Touch" }
            if state.sent {
                SuccessBanner { id: CONTACT_SENT_ID.to_string(), message: CONTACT_SENT.to_string() }
            }
            ErrorBanner { message: state.error }
            form { method: "post", action: "/contact",
                label {
                    "Name"
                    input { r#type: "text", name: "name", value: "{form.name}", required: true }
                }
                label {
                    "Email"
                    input { r#type: "email", name: "email", value: "{form.email}", required: true }
                }
                label {
                    "Message"
                    textarea { name: "message", rows: "5", required: true, "{form.message}" }
                }
                button { r#type: "submit", "Send Message" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn about() -> AboutSection {
        AboutSection {
            id: "a1".into(),
            bio: "I build things.".into(),
            skills: vec!["Rust".into(), "React".into()],
            hobbies: vec!["Chess".into()],
            updated_at: None,
        }
    }

    #[test]
    fn renders_bio_skills_and_hobbies() {
        let html = dioxus::ssr::render_element(rsx! {
            AboutPage { theme: Theme::Dark, about: Some(about()) }
        });
        assert!(html.contains("I build things."));
        assert!(html.contains("Rust"));
        assert!(html.contains("Chess"));
        assert!(html.contains(r#"id="contact""#));
    }

    #[test]
    fn missing_about_says_so() {
        let html = dioxus::ssr::render_element(rsx! {
            AboutPage { theme: Theme::Dark, about: None }
        });
        assert!(html.contains("About section not found"));
    }

    #[test]
    fn load_error_replaces_not_found() {
        let html = dioxus::ssr::render_element(rsx! {
            AboutPage {
                theme: Theme::Dark,
                about: None,
                load_error: Some("Server error. Please try again later.".to_string()),
            }
        });
        assert!(html.contains("Server error. Please try again later."));
        assert!(!html.contains("About section not found"));
    }

    #[test]
    fn sent_banner_hides_after_five_seconds() {
        let contact = ContactState {
            sent: true,
            ..Default::default()
        };
        let html = dioxus::ssr::render_element(rsx! {
            AboutPage { theme: Theme::Dark, about: None, contact: contact }
        });
        assert!(html.contains(CONTACT_SENT));
        assert!(html.contains("5000"));
    }

    #[test]
    fn failed_submission_keeps_form_values() {
        let contact = ContactState {
            form: ContactForm {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                message: "Hello there".into(),
            },
            error: Some("No response from server. Please check your connection.".into()),
            sent: false,
        };
        let html = dioxus::ssr::render_element(rsx! {
            AboutPage { theme: Theme::Dark, about: None, contact: contact }
        });
        assert!(html.contains(r#"value="Ada""#));
        assert!(html.contains("Hello there"));
        assert!(html.contains("No response from server"));
        assert!(!html.contains(CONTACT_SENT));
    }
}
