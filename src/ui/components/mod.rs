//! Shared Dioxus components for the server-rendered site.

pub mod confirm;
pub mod layout;
pub mod nav;
pub mod notice;
pub mod riddle;
pub mod theme;

pub use confirm::ConfirmDelete;
pub use layout::Layout;
pub use nav::Nav;
pub use notice::{dismiss_script, ErrorBanner, SuccessBanner};
pub use riddle::{riddle_error_script, RiddleModal};
pub use theme::ThemeToggle;
