//! Records SPA App
//!
//! Root component: builds the store, provides shared state,
//! and renders the view the route table picks for the current path.

use std::sync::Arc;

use lazy_routes::RouteTable;
use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::api::{ApiConfig, ReqwestTransport};
use crate::components::NavBar;
use crate::routes::{app_routes, ViewId};
use crate::store::ResourceStore;
use crate::views::{AboutView, CanvasDemoView, HomeView, NotFoundView};

pub type AppRoutes = Arc<RouteTable<ViewId>>;

/// Get the route table from context
pub fn use_routes() -> AppRoutes {
    expect_context::<AppRoutes>()
}

#[component]
pub fn App() -> impl IntoView {
    // Single store instance for the whole app
    let store = ResourceStore::new(ApiConfig::default(), Arc::new(ReqwestTransport::new()));
    provide_context(store);
    provide_context::<AppRoutes>(Arc::new(app_routes()));

    view! {
        <Router>
            <div class="app-layout">
                <NavBar />
                <main class="main-content">
                    <RouterOutlet />
                </main>
            </div>
        </Router>
    }
}

/// Renders the view matching the current location
#[component]
fn RouterOutlet() -> impl IntoView {
    let routes = use_routes();
    let location = use_location();

    move || {
        let path = location.pathname.get();
        match routes.resolve(&path) {
            Some(ViewId::Home) => view! { <HomeView /> }.into_any(),
            Some(ViewId::CanvasDemo) => view! { <CanvasDemoView /> }.into_any(),
            Some(ViewId::About) => view! { <AboutView /> }.into_any(),
            None => {
                log::warn!("[ROUTER] No route for '{}'", path);
                view! { <NotFoundView path=path /> }.into_any()
            }
        }
    }
}
