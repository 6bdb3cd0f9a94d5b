//! Quiz Admin App
//!
//! Header, endpoint tabs, item table, and the add/edit/delete modals.

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    AddItemModal, DeleteConfirmModal, EditItemModal, EndpointTabBar, ItemTable, ModalTarget,
};
use crate::config::{endpoint_from_location, ApiConfig};
use crate::context::AppContext;
use crate::models::Endpoint;
use crate::store::{store_invalidate, store_set_error, store_set_rows, AdminState};

/// A list response applies only if no tab switch or newer reload happened
/// while it was in flight. Pairs are (endpoint, reload trigger).
fn is_latest_load(requested: (Endpoint, u32), latest: (Endpoint, u32)) -> bool {
    requested == latest
}

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_document();
    log!(
        "[APP] API base '{}', token key '{}', refresh {:?}",
        config.base_url,
        config.token_key,
        config.refresh
    );

    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (endpoint, set_endpoint) = signal(endpoint_from_location().unwrap_or(Endpoint::Level));
    let adding = RwSignal::new(false);
    let modal_target = RwSignal::new(None::<ModalTarget>);

    let ctx = AppContext::new(
        (reload_trigger, set_reload_trigger),
        (endpoint, set_endpoint),
        config,
    );
    provide_context(ctx);

    let store = Store::new(AdminState::default());
    provide_context(store);

    // Load the list when the endpoint or trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let current = endpoint.get();
        log!("[APP] Loading {} list, trigger={}", current.as_str(), trigger);
        store_invalidate(&store);

        let config = ctx.config();
        spawn_local(async move {
            let result = api::list_items(&config, current).await;
            let latest = (endpoint.get_untracked(), reload_trigger.get_untracked());
            if !is_latest_load((current, trigger), latest) {
                log!("[APP] Dropping stale {} list, trigger={}", current.as_str(), trigger);
                return;
            }
            match result {
                Ok(rows) => {
                    log!("[APP] Loaded {} {} rows", rows.len(), current.as_str());
                    store_set_rows(&store, current, rows);
                }
                Err(e) => {
                    error!("[APP] Failed to load {} list: {}", current.as_str(), e);
                    store_set_error(&store, e.to_string());
                }
            }
        });
    });

    view! {
        <div class="container admin-layout">
            <div class="header-bar d-flex justify-content-between align-items-center">
                <h2>{move || format!("{} Management", endpoint.get().label())}</h2>
                <button class="btn btn-primary add-item-btn" on:click=move |_| adding.set(true)>
                    "Add New Item"
                </button>
            </div>

            <EndpointTabBar />

            <ItemTable target=modal_target />

            <AddItemModal open=adding />
            <EditItemModal target=modal_target />
            <DeleteConfirmModal target=modal_target />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_older_reload_of_same_endpoint_is_dropped() {
        // Two deletes in a row: the first refresh resolving last must not win
        assert!(!is_latest_load((Endpoint::Question, 1), (Endpoint::Question, 2)));
        assert!(is_latest_load((Endpoint::Question, 2), (Endpoint::Question, 2)));
    }

    #[test]
    fn test_load_for_previous_tab_is_dropped() {
        assert!(!is_latest_load((Endpoint::Level, 0), (Endpoint::Section, 0)));
    }
}
