//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod record_list;

pub use nav_bar::NavBar;
pub use record_list::RecordList;
