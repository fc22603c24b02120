use dioxus::prelude::*;

use crate::session::Theme;
use crate::ui::components::{ErrorBanner, Layout};
use crate::web::ADMIN_ROUTE;

/// Password form shown on the admin route while unauthenticated.
#[component]
pub fn LoginPage(theme: Theme, error: Option<String>) -> Element {
    let action = format!("{ADMIN_ROUTE}/login");

    rsx! {
        Layout {
            title: "Admin Login".to_string(),
            nav_active: String::new(),
            theme: theme,
            path: ADMIN_ROUTE.to_string(),

            article { style: "max-width: 420px; margin: 3rem auto;",
                header { h2 { "Admin Login" } }
                ErrorBanner { message: error }
                form { method: "post", action: "{action}",
                    label {
                        "Password"
                        input {
                            r#type: "password",
                            name: "password",
                            autocomplete: "current-password",
                            autofocus: true,
                            required: true,
                        }
                    }
                    button { r#type: "submit", "Login" }
                }
            }
        }
    }
}
