//! Admin API Bindings
//!
//! HTTP calls to the content API, organized by resource. Every request
//! carries the bearer token resolved from browser storage at send time.

mod general;
mod question;
pub mod routes;

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::{error, log};
use serde_json::Value;
use web_sys::{File, FormData};

use crate::config::{authorization_header, ApiConfig};
use crate::error::AdminError;
use crate::models::ApiMessage;
use crate::payload::{FormValue, Payload};
use routes::{HttpMethod, Route};

pub use general::*;
pub use question::*;

/// Payload as built from a browser form
pub type FilePayload = Payload<File>;

/// User action an API call belongs to; picks alert wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateQuestion,
    CreateItem,
    Update,
    Delete,
    Fetch,
}

impl Action {
    /// Shown when the success body carries no message
    pub fn default_success(&self) -> &'static str {
        match self {
            Action::CreateQuestion => "Question added successfully!",
            Action::CreateItem => "Item added successfully!",
            Action::Update => "Item updated successfully",
            Action::Delete => "Item deleted successfully",
            Action::Fetch => "Item loaded",
        }
    }

    /// Alert text for a failed action. Validation messages pass through as-is.
    pub fn failure_alert(&self, err: &AdminError) -> String {
        if let AdminError::Validation(v) = err {
            return v.to_string();
        }
        match self {
            Action::CreateQuestion | Action::CreateItem => format!("Error: {}", err),
            Action::Update => format!("An error occurred while updating the item: {}", err),
            Action::Delete => format!("An error occurred while deleting the item: {}", err),
            Action::Fetch => format!("An error occurred while fetching the item data: {}", err),
        }
    }
}

/// Success alert text from a response body
pub fn success_message(body: &Value, action: Action) -> String {
    serde_json::from_value::<ApiMessage>(body.clone())
        .ok()
        .and_then(|m| m.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| action.default_success().to_string())
}

/// Strip a `{ "data": ... }` envelope when present
pub fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) if matches!(map.get("data"), Some(Value::Object(_) | Value::Array(_))) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Turn status and body text into the call's result.
///
/// Any non-2xx status fails, even when the body parses. An empty success
/// body reads as `null`.
pub fn interpret_response(
    ok: bool,
    status: u16,
    status_text: &str,
    text: &str,
) -> Result<Value, AdminError> {
    if !ok {
        let message = serde_json::from_str::<ApiMessage>(text)
            .ok()
            .and_then(|m| m.text());
        return Err(AdminError::Http {
            status,
            status_text: status_text.to_string(),
            message,
        });
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

fn to_form_data(parts: Vec<(&'static str, FormValue<File>)>) -> Result<FormData, AdminError> {
    let form = FormData::new().map_err(AdminError::browser)?;
    for (name, value) in parts {
        let appended = match value {
            FormValue::Text(text) => form.append_with_str(name, &text),
            FormValue::File(file) => form.append_with_blob_and_filename(name, &file, &file.name()),
        };
        appended.map_err(AdminError::browser)?;
    }
    Ok(form)
}

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

async fn read_response(response: Response) -> Result<Value, AdminError> {
    let status = response.status();
    let ok = response.ok();
    let status_text = response.status_text();
    let text = response.text().await?;
    interpret_response(ok, status, &status_text, &text)
}

/// Send one request and return its parsed body
pub async fn send(
    config: &ApiConfig,
    route: &Route,
    payload: Option<FilePayload>,
) -> Result<Value, AdminError> {
    let authorization = authorization_header(&config.token_source())?;
    let url = config.url(&route.path);

    match &payload {
        Some(p) => log!("[API] {} payload={}", route, p.summary()),
        None => log!("[API] {}", route),
    }

    let mut request = builder(route.method, &url).header("Authorization", &authorization);
    if let Some(content_type) = payload.as_ref().and_then(|p| p.content_type()) {
        request = request.header("Content-Type", content_type);
    }
    let request = match payload {
        None => request.build()?,
        Some(Payload::Json(body)) => request.body(body.to_string())?,
        Some(Payload::Multipart(parts)) => request.body(to_form_data(parts)?)?,
    };

    let result = match request.send().await {
        Ok(response) => read_response(response).await,
        Err(e) => Err(e.into()),
    };
    if let Err(e) = &result {
        error!("[API] {} failed: {}", route, e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use serde_json::json;

    #[test]
    fn test_success_message_uses_body_or_default() {
        assert_eq!(
            success_message(&json!({"message": "Question created successfully"}), Action::CreateQuestion),
            "Question created successfully"
        );
        assert_eq!(
            success_message(&json!({"id": 3, "name": "Beginner"}), Action::CreateItem),
            "Item added successfully!"
        );
        assert_eq!(success_message(&Value::Null, Action::Delete), "Item deleted successfully");
    }

    #[test]
    fn test_non_2xx_fails_even_with_json_body() {
        let result = interpret_response(false, 400, "BAD REQUEST", r#"{"error": "Invalid endpoint: lvl"}"#);
        assert_eq!(
            result,
            Err(AdminError::Http {
                status: 400,
                status_text: "BAD REQUEST".to_string(),
                message: Some("Invalid endpoint: lvl".to_string()),
            })
        );
    }

    #[test]
    fn test_non_json_error_body_keeps_status() {
        let result = interpret_response(false, 502, "Bad Gateway", "<html>upstream down</html>");
        assert!(matches!(
            result,
            Err(AdminError::Http { status: 502, message: None, .. })
        ));
    }

    #[test]
    fn test_ok_response_parsing() {
        assert_eq!(interpret_response(true, 200, "OK", "").unwrap(), Value::Null);
        assert_eq!(
            interpret_response(true, 201, "CREATED", r#"{"id": 4}"#).unwrap(),
            json!({"id": 4})
        );
        assert!(matches!(
            interpret_response(true, 200, "OK", "not json"),
            Err(AdminError::Decode(_))
        ));
    }

    #[test]
    fn test_unwrap_data_envelope() {
        assert_eq!(
            unwrap_data(json!({"status": "success", "data": {"id": 1}})),
            json!({"id": 1})
        );
        assert_eq!(unwrap_data(json!({"data": [1, 2]})), json!([1, 2]));
        // A resource field that happens to be called `data` but is a string stays put
        assert_eq!(
            unwrap_data(json!({"id": 1, "data": "x"})),
            json!({"id": 1, "data": "x"})
        );
    }

    #[test]
    fn test_failure_alert_wording() {
        let http = AdminError::Http {
            status: 404,
            status_text: "NOT FOUND".to_string(),
            message: Some("Question not found".to_string()),
        };
        assert_eq!(
            Action::Update.failure_alert(&http),
            "An error occurred while updating the item: NOT FOUND (404) - Question not found"
        );
        assert_eq!(
            Action::CreateQuestion.failure_alert(&http),
            "Error: NOT FOUND (404) - Question not found"
        );
        assert_eq!(
            Action::Delete.failure_alert(&ValidationError::EmptyChoice.into()),
            "All choice contents must be filled for multiple-choice questions."
        );
    }
}
