//! Navigation Bar Component
//!
//! Links are built from the route table by route name.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::use_routes;

const LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("canvas-demo", "Canvas Demo"),
    ("about", "About"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let routes = use_routes();

    view! {
        <nav class="nav-bar">
            {LINKS
                .iter()
                .filter_map(|(name, label)| {
                    routes.path_for(name).map(|path| view! { <A href=path>{*label}</A> })
                })
                .collect_view()}
        </nav>
    }
}
