//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::{ApiConfig, RefreshStrategy};
use crate::dialog;
use crate::models::Endpoint;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to re-fetch the current list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch the current list - write
    set_reload_trigger: WriteSignal<u32>,
    /// Endpoint the dashboard is managing - read
    pub endpoint: ReadSignal<Endpoint>,
    /// Endpoint the dashboard is managing - write
    set_endpoint: WriteSignal<Endpoint>,
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        endpoint: (ReadSignal<Endpoint>, WriteSignal<Endpoint>),
        config: ApiConfig,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            endpoint: endpoint.0,
            set_endpoint: endpoint.1,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a re-fetch of the current list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn set_endpoint(&self, endpoint: Endpoint) {
        self.set_endpoint.set(endpoint);
    }

    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }

    /// After a successful create/update/delete: tell the user, then refresh
    /// from the server
    pub fn finish_mutation(&self, message: &str) {
        dialog::alert(message);
        match self.config.with_value(|c| c.refresh) {
            RefreshStrategy::RefetchList => self.reload(),
            RefreshStrategy::FullPage => dialog::reload_page(),
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
