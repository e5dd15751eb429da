//! UI Components
//!
//! Dashboard-specific Leptos components. Generic list building blocks live
//! in the `leptos-resource-view` crate.

mod page_header;
mod screen_tab_bar;
mod user_edit_modal;

pub use page_header::PageHeader;
pub use screen_tab_bar::{Screen, ScreenTabBar};
pub use user_edit_modal::UserEditModal;
