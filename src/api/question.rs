//! Question Calls
//!
//! Questions are created and updated through `/api/question`, which accepts
//! choices and media alongside the question itself.

use super::routes::submit_route;
use super::{send, success_message, Action, FilePayload};
use crate::config::ApiConfig;
use crate::error::AdminError;
use crate::models::Endpoint;
use crate::payload::FormMode;

pub async fn create_question(
    config: &ApiConfig,
    section_id: i64,
    payload: FilePayload,
) -> Result<String, AdminError> {
    let route = submit_route(Endpoint::Question, FormMode::Create, Some(section_id));
    let body = send(config, &route, Some(payload)).await?;
    Ok(success_message(&body, Action::CreateQuestion))
}

pub async fn update_question(config: &ApiConfig, id: u32, payload: FilePayload) -> Result<String, AdminError> {
    let route = submit_route(Endpoint::Question, FormMode::Edit(id), None);
    let body = send(config, &route, Some(payload)).await?;
    Ok(success_message(&body, Action::Update))
}
