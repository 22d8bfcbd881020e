//! Lazy Routes
//!
//! Ordered path -> view table for client-side routers.
//! Views are either available up front or produced by a loader
//! that runs on first navigation and is memoized afterwards.

use std::sync::OnceLock;

/// Memoized view loader
pub struct LazyView<V> {
    loader: fn() -> V,
    resolved: OnceLock<V>,
}

impl<V> LazyView<V> {
    pub fn new(loader: fn() -> V) -> Self {
        Self {
            loader,
            resolved: OnceLock::new(),
        }
    }

    /// Run the loader on first call, reuse its result afterwards
    pub fn resolve(&self) -> &V {
        self.resolved.get_or_init(self.loader)
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }
}

/// How a route obtains its view
pub enum ViewLoader<V> {
    /// Part of the initial load
    Eager(V),
    /// Fetched on demand, first navigation only
    Lazy(LazyView<V>),
}

impl<V> ViewLoader<V> {
    pub fn lazy(loader: fn() -> V) -> Self {
        ViewLoader::Lazy(LazyView::new(loader))
    }

    fn resolve(&self) -> &V {
        match self {
            ViewLoader::Eager(view) => view,
            ViewLoader::Lazy(lazy) => lazy.resolve(),
        }
    }

    fn is_resolved(&self) -> bool {
        match self {
            ViewLoader::Eager(_) => true,
            ViewLoader::Lazy(lazy) => lazy.is_resolved(),
        }
    }
}

/// Single table entry
pub struct Route<V> {
    pub path: &'static str,
    pub name: &'static str,
    loader: ViewLoader<V>,
}

impl<V> Route<V> {
    pub fn is_lazy(&self) -> bool {
        matches!(self.loader, ViewLoader::Lazy(_))
    }
}

/// Ordered route table; the first matching entry wins
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<V: Clone> RouteTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route (builder style)
    pub fn route(mut self, path: &'static str, name: &'static str, loader: ViewLoader<V>) -> Self {
        self.routes.push(Route { path, name, loader });
        self
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    /// Find the entry matching `path`
    pub fn find(&self, path: &str) -> Option<&Route<V>> {
        let path = normalize(path);
        self.routes.iter().find(|route| route.path == path)
    }

    /// Resolve `path` to its view, running a lazy loader if needed
    pub fn resolve(&self, path: &str) -> Option<V> {
        let route = self.find(path)?;
        if !route.loader.is_resolved() {
            log::debug!("[ROUTER] loading view for '{}'", route.name);
        }
        Some(route.loader.resolve().clone())
    }

    /// Path of the route registered under `name`
    pub fn path_for(&self, name: &str) -> Option<&'static str> {
        self.routes.iter().find(|route| route.name == name).map(|route| route.path)
    }

    /// Whether the view for `path` is available without loading
    pub fn is_resolved(&self, path: &str) -> bool {
        self.find(path).is_some_and(|route| route.loader.is_resolved())
    }
}

/// Drop one trailing slash, keep the root as is
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static SETTINGS_LOADS: AtomicUsize = AtomicUsize::new(0);
    static REPORTS_LOADS: AtomicUsize = AtomicUsize::new(0);

    fn load_settings() -> &'static str {
        SETTINGS_LOADS.fetch_add(1, Ordering::SeqCst);
        "settings"
    }

    fn load_reports() -> &'static str {
        REPORTS_LOADS.fetch_add(1, Ordering::SeqCst);
        "reports"
    }

    fn make_table() -> RouteTable<&'static str> {
        RouteTable::new()
            .route("/", "home", ViewLoader::Eager("home"))
            .route("/settings", "settings", ViewLoader::lazy(load_settings))
            .route("/reports", "reports", ViewLoader::lazy(load_reports))
    }

    #[test]
    fn test_eager_route_resolves_immediately() {
        let table = make_table();
        assert!(table.is_resolved("/"));
        assert_eq!(table.resolve("/"), Some("home"));
    }

    #[test]
    fn test_lazy_route_loads_once() {
        let table = make_table();
        assert!(!table.is_resolved("/settings"));
        assert_eq!(SETTINGS_LOADS.load(Ordering::SeqCst), 0);

        assert_eq!(table.resolve("/settings"), Some("settings"));
        assert_eq!(SETTINGS_LOADS.load(Ordering::SeqCst), 1);
        assert!(table.is_resolved("/settings"));

        assert_eq!(table.resolve("/settings"), Some("settings"));
        assert_eq!(table.resolve("/settings/"), Some("settings"));
        assert_eq!(SETTINGS_LOADS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_lazy_routes_are_independent() {
        let table = make_table();
        table.resolve("/");
        assert_eq!(REPORTS_LOADS.load(Ordering::SeqCst), 0);
        assert!(!table.is_resolved("/reports"));
    }

    #[test]
    fn test_unknown_path() {
        let table = make_table();
        assert_eq!(table.resolve("/missing"), None);
        assert!(table.find("").is_none());
        assert!(!table.is_resolved("/missing"));
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new()
            .route("/dup", "first", ViewLoader::Eager(1))
            .route("/dup", "second", ViewLoader::Eager(2));
        assert_eq!(table.resolve("/dup"), Some(1));
        assert_eq!(table.find("/dup").map(|r| r.name), Some("first"));
    }

    #[test]
    fn test_path_for_name() {
        let table = make_table();
        assert_eq!(table.path_for("reports"), Some("/reports"));
        assert_eq!(table.path_for("nope"), None);
        assert!(table.find("/reports").is_some_and(|r| r.is_lazy()));
        assert_eq!(table.routes().count(), 3);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("/about/"), "/about");
        assert_eq!(normalize("/about"), "/about");
    }
}
