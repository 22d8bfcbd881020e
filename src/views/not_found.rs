//! Not Found View
//!
//! Fallback for paths with no route.

use leptos::prelude::*;

#[component]
pub fn NotFoundView(path: String) -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Not found"</h1>
            <p>{format!("No page at {}", path)}</p>
        </section>
    }
}
