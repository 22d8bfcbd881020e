//! Routed Views
//!
//! One component per route, plus the fallback for unknown paths.

mod about;
mod canvas_demo;
mod home;
mod not_found;

pub use about::AboutView;
pub use canvas_demo::CanvasDemoView;
pub use home::HomeView;
pub use not_found::NotFoundView;
