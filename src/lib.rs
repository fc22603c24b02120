//! Portfolio site - server-rendered personal portfolio with an admin panel
//!
//! All content lives behind a remote portfolio REST API; this crate renders
//! it and forwards admin edits.
//!
//! This library provides:
//! - A typed client for the portfolio REST API (blogs, projects, about, contact)
//! - Public pages: home, about with contact form, blog, projects
//! - A password-protected admin panel managing every resource
//! - Cookie-backed theme and admin session state
//! - Web UI rendered with Dioxus SSR (Pico CSS)

pub mod client;
pub mod config;
pub mod forms;
pub mod models;
pub mod riddle;
pub mod session;
pub mod ui;
pub mod web;
