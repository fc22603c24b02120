//! Page components, one per route.

pub mod about;
pub mod admin;
pub mod blog;
pub mod hidden;
pub mod home;
pub mod projects;

pub use about::{AboutPage, ContactState};
pub use blog::BlogPage;
pub use hidden::HiddenPage;
pub use home::{HomePage, RiddleState};
pub use projects::ProjectsPage;
