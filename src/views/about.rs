//! About View
//!
//! Static description of the app.

use leptos::prelude::*;

#[component]
pub fn AboutView() -> impl IntoView {
    view! {
        <section class="about">
            <h1>"About"</h1>
            <p>"A small single-page shell: a router with lazily resolved views and a store that loads records from a remote API."</p>
        </section>
    }
}
