//! Application Routes
//!
//! Path -> view table. Home ships with the initial load,
//! the other views are resolved on first navigation.

use lazy_routes::{RouteTable, ViewLoader};

/// Views the router can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Home,
    CanvasDemo,
    About,
}

pub fn app_routes() -> RouteTable<ViewId> {
    RouteTable::new()
        // Eager loaded routes
        .route("/", "home", ViewLoader::Eager(ViewId::Home))
        // Lazy loaded routes
        .route("/canvas-demo", "canvas-demo", ViewLoader::lazy(load_canvas_demo))
        .route("/about", "about", ViewLoader::lazy(load_about))
}

fn load_canvas_demo() -> ViewId {
    log::info!("[ROUTER] Resolved canvas-demo view");
    ViewId::CanvasDemo
}

fn load_about() -> ViewId {
    log::info!("[ROUTER] Resolved about view");
    ViewId::About
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_routes_resolve() {
        let routes = app_routes();
        assert_eq!(routes.resolve("/"), Some(ViewId::Home));
        assert_eq!(routes.resolve("/about"), Some(ViewId::About));
        assert_eq!(routes.resolve("/nowhere"), None);
    }

    #[test]
    fn test_canvas_demo_resolved_on_first_navigation() {
        let routes = app_routes();
        assert!(routes.is_resolved("/"));
        assert!(!routes.is_resolved("/canvas-demo"));

        assert_eq!(routes.resolve("/canvas-demo"), Some(ViewId::CanvasDemo));
        assert!(routes.is_resolved("/canvas-demo"));
        assert!(!routes.is_resolved("/about"));

        assert_eq!(routes.resolve("/canvas-demo"), Some(ViewId::CanvasDemo));
    }

    #[test]
    fn test_route_order_and_names() {
        let routes = app_routes();
        let names: Vec<_> = routes.routes().map(|r| r.name).collect();
        assert_eq!(names, vec!["home", "canvas-demo", "about"]);
        assert_eq!(routes.path_for("canvas-demo"), Some("/canvas-demo"));
        assert!(!routes.find("/").unwrap().is_lazy());
    }
}
