//! Home View
//!
//! Loads records on demand and renders the store's status.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::RecordList;
use crate::store::use_resource_store;

#[component]
pub fn HomeView() -> impl IntoView {
    let store = use_resource_store();

    let load = {
        let store = store.clone();
        move |_| {
            let store = store.clone();
            spawn_local(async move {
                // Store already holds the error for display
                if let Err(e) = store.fetch_records().await {
                    log::warn!("[HOME] Load failed: {}", e);
                }
            });
        }
    };

    let is_loading = {
        let store = store.clone();
        Signal::derive(move || store.is_loading())
    };
    let has_error = {
        let store = store.clone();
        Signal::derive(move || store.has_error())
    };
    let error = {
        let store = store.clone();
        Signal::derive(move || store.error().unwrap_or_default())
    };
    let records = Signal::derive(move || store.records());

    view! {
        <section class="home">
            <h1>"Records"</h1>
            <button
                class="load-btn"
                disabled=move || is_loading.get()
                on:click=load
            >
                {move || if is_loading.get() { "Loading..." } else { "Load records" }}
            </button>

            <Show when=move || has_error.get()>
                <p class="error">{move || error.get()}</p>
            </Show>

            <RecordList records=records />
        </section>
    }
}
