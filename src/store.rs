//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Endpoint, ItemRecord};

/// Rows of the list currently on screen
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Endpoint the rows were fetched from
    pub endpoint: Option<Endpoint>,
    /// Items of the current endpoint, as last fetched
    pub rows: Vec<ItemRecord>,
    /// Set while a list fetch is in flight
    pub loading: bool,
    /// Why the last list fetch failed, if it did
    pub load_error: Option<String>,
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Mark the list stale before a re-fetch. Rows stay visible until replaced.
pub fn store_invalidate(store: &AdminStore) {
    *store.loading().write() = true;
    *store.load_error().write() = None;
}

/// Replace the list with freshly fetched rows
pub fn store_set_rows(store: &AdminStore, endpoint: Endpoint, rows: Vec<ItemRecord>) {
    *store.endpoint().write() = Some(endpoint);
    *store.rows().write() = rows;
    *store.loading().write() = false;
}

/// Record a failed fetch, dropping rows that can no longer be trusted
pub fn store_set_error(store: &AdminStore, message: String) {
    *store.endpoint().write() = None;
    store.rows().write().clear();
    *store.loading().write() = false;
    *store.load_error().write() = Some(message);
}
