//! Server-rendered HTML for the public site and the admin panel.
//!
//! Pages are Dioxus components rendered once per request with
//! `dioxus::ssr`; nothing is hydrated. Interaction is plain HTML forms
//! posting back to the server, plus a couple of inline timers for
//! dismissing banners.
//!
//! - components/ - Shared pieces (layout, nav, theme toggle, banners, modals)
//! - pages/ - One component per route, admin managers under pages/admin

pub mod components;
pub mod pages;

use axum::response::Html;
use dioxus::prelude::*;

use crate::session::Theme;

/// Render a page component into a full HTML document.
///
/// The theme goes on the root element so CSS applies before first paint.
pub fn render_page(theme: Theme, page: Element) -> Html<String> {
    let html = dioxus::ssr::render_element(page);
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"{}\">\n{}</html>",
        theme.as_str(),
        html
    ))
}
