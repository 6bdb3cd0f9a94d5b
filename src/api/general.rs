//! General Resource Calls
//!
//! Fetch, list, create, update and delete for levels, sections and questions
//! through `/api/general/{endpoint}`.

use serde_json::Value;

use super::routes::{delete_route, fetch_route, list_route, submit_route};
use super::{send, success_message, unwrap_data, Action, FilePayload};
use crate::config::ApiConfig;
use crate::error::AdminError;
use crate::models::{Endpoint, ItemRecord};
use crate::payload::FormMode;

pub async fn list_items(config: &ApiConfig, endpoint: Endpoint) -> Result<Vec<ItemRecord>, AdminError> {
    let body = send(config, &list_route(endpoint), None).await?;
    Ok(serde_json::from_value(unwrap_data(body))?)
}

/// Raw body of one item, as the edit modal populates from it
pub async fn fetch_item(config: &ApiConfig, endpoint: Endpoint, id: u32) -> Result<Value, AdminError> {
    let body = send(config, &fetch_route(endpoint, id), None).await?;
    Ok(unwrap_data(body))
}

/// Create a level or section. Returns the success alert text.
pub async fn create_item(
    config: &ApiConfig,
    endpoint: Endpoint,
    payload: FilePayload,
) -> Result<String, AdminError> {
    let route = submit_route(endpoint, FormMode::Create, None);
    let body = send(config, &route, Some(payload)).await?;
    Ok(success_message(&body, Action::CreateItem))
}

/// Update a level or section. Returns the success alert text.
pub async fn update_item(
    config: &ApiConfig,
    endpoint: Endpoint,
    id: u32,
    payload: FilePayload,
) -> Result<String, AdminError> {
    let route = submit_route(endpoint, FormMode::Edit(id), None);
    let body = send(config, &route, Some(payload)).await?;
    Ok(success_message(&body, Action::Update))
}

/// Delete any item. Returns the success alert text.
pub async fn delete_item(config: &ApiConfig, endpoint: Endpoint, id: u32) -> Result<String, AdminError> {
    let body = send(config, &delete_route(endpoint, id), None).await?;
    Ok(success_message(&body, Action::Delete))
}
