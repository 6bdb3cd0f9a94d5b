//! Browser Dialogs
//!
//! Blocking alerts and page reload.

use leptos::logging::{error, warn};

use crate::api::Action;
use crate::error::AdminError;

pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        warn!("[DIALOG] no window for alert: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        warn!("[DIALOG] alert failed: {:?}", e);
    }
}

/// Log a failed action and tell the user
pub fn report_failure(action: Action, err: &AdminError) {
    if err.is_validation() {
        warn!("[{:?}] rejected: {}", action, err);
    } else {
        error!("[{:?}] {}", action, err);
    }
    alert(&action.failure_alert(err));
}

pub fn reload_page() {
    let reloaded = web_sys::window()
        .ok_or_else(|| AdminError::Browser("no window".to_string()))
        .and_then(|w| w.location().reload().map_err(AdminError::browser));
    if let Err(e) = reloaded {
        error!("[DIALOG] page reload failed: {}", e);
    }
}
