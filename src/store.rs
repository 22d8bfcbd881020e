//! Records Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! `ResourceStore` is built once by the App root and shared via context.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiConfig, HttpRequest, Transport, APPLICATION_JSON, CONTENT_TYPE};
use crate::error::FetchError;
use crate::models::Record;

/// Fetched records and request status with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ApiState {
    /// Last successfully fetched collection
    pub records: Vec<Record>,
    /// True while a fetch is in flight
    pub loading: bool,
    /// Message of the last failed fetch, cleared when a fetch starts
    pub error: Option<String>,
}

/// Type alias for the store
pub type ApiStore = Store<ApiState>;

/// Store plus the endpoint and transport it fetches with
#[derive(Clone)]
pub struct ResourceStore {
    state: ApiStore,
    config: Arc<ApiConfig>,
    transport: Arc<dyn Transport>,
}

impl ResourceStore {
    pub fn new(config: ApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            state: Store::new(ApiState::default()),
            config: Arc::new(config),
            transport,
        }
    }

    pub fn state(&self) -> ApiStore {
        self.state
    }

    // Tracked getters, for views and effects

    pub fn is_loading(&self) -> bool {
        self.state.loading().get()
    }

    pub fn has_error(&self) -> bool {
        self.state.error().read().is_some()
    }

    pub fn records(&self) -> Vec<Record> {
        self.state.records().get()
    }

    pub fn error(&self) -> Option<String> {
        self.state.error().get()
    }

    // Untracked getters, for callers outside a reactive scope

    pub fn is_loading_untracked(&self) -> bool {
        self.state.loading().get_untracked()
    }

    pub fn has_error_untracked(&self) -> bool {
        self.state.error().read_untracked().is_some()
    }

    pub fn records_untracked(&self) -> Vec<Record> {
        self.state.records().get_untracked()
    }

    pub fn error_untracked(&self) -> Option<String> {
        self.state.error().get_untracked()
    }

    /// Fetch the records collection and replace the stored one.
    ///
    /// On failure the message lands in `error` and the error is returned.
    /// `loading` is cleared last on every path. Concurrent calls are not
    /// serialized: the last response to arrive decides the final state.
    pub async fn fetch_records(&self) -> Result<Vec<Record>, FetchError> {
        *self.state.loading().write() = true;
        *self.state.error().write() = None;
        let _loading = LoadingGuard(self.state);

        match self.request().await {
            Ok(records) => {
                log::info!("[STORE] Loaded {} records", records.len());
                *self.state.records().write() = records.clone();
                Ok(records)
            }
            Err(err) => {
                log::error!("[STORE] API request failed: {}", err);
                *self.state.error().write() = Some(err.to_string());
                Err(err)
            }
        }
    }

    async fn request(&self) -> Result<Vec<Record>, FetchError> {
        let request = HttpRequest::get(self.config.endpoint()).header(CONTENT_TYPE, APPLICATION_JSON);
        log::debug!("[STORE] GET {}", request.url);

        let response = self.transport.get(&request).await?;
        if !response.is_success() {
            return Err(FetchError::Status(response.status));
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}

/// Clears `loading` when the fetch finishes or its future is dropped
struct LoadingGuard(ApiStore);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        *self.0.loading().write() = false;
    }
}

/// Get the records store from context
pub fn use_resource_store() -> ResourceStore {
    expect_context::<ResourceStore>()
}
