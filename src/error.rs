//! Error Types
//!
//! Every failure an admin action can hit. Components turn these into alerts.

use thiserror::Error;

/// Client-side form validation failures. Messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Section ID is required to add a question.")]
    MissingSectionId,
    #[error("Level ID is required to create a section.")]
    MissingLevelId,
    #[error("{field} must be a whole number, got \"{value}\".")]
    NotANumber { field: &'static str, value: String },
    #[error("Invalid question type selected.")]
    InvalidAnswerType,
    #[error("All choice contents must be filled for multiple-choice questions.")]
    EmptyChoice,
    #[error("At least one correct choice is required for multiple-choice questions.")]
    NoCorrectChoice,
    #[error("Correct answer is required for fill-in-the-blank questions.")]
    MissingCorrectAnswer,
    #[error("Media file is required for image/video questions.")]
    MissingMedia,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdminError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response, whatever the body says
    #[error("{status_text} ({status}){}", .message.as_deref().map(|m| format!(" - {}", m)).unwrap_or_default())]
    Http {
        status: u16,
        status_text: String,
        message: Option<String>,
    },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("no admin token found in browser storage under \"{0}\"; sign in again")]
    MissingCredential(String),

    #[error("missing form element: {0}")]
    MissingElement(&'static str),

    #[error("browser API failed: {0}")]
    Browser(String),
}

impl AdminError {
    /// Wrap a `JsValue` error from a web-sys call
    pub fn browser(err: impl std::fmt::Debug) -> Self {
        AdminError::Browser(format!("{:?}", err))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AdminError::Validation(_))
    }
}

impl From<gloo_net::Error> for AdminError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AdminError::Decode(e.to_string()),
            other => AdminError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display_with_and_without_message() {
        let with = AdminError::Http {
            status: 400,
            status_text: "BAD REQUEST".to_string(),
            message: Some("Invalid endpoint: lvl".to_string()),
        };
        assert_eq!(with.to_string(), "BAD REQUEST (400) - Invalid endpoint: lvl");

        let without = AdminError::Http {
            status: 500,
            status_text: "INTERNAL SERVER ERROR".to_string(),
            message: None,
        };
        assert_eq!(without.to_string(), "INTERNAL SERVER ERROR (500)");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: AdminError = ValidationError::NoCorrectChoice.into();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "At least one correct choice is required for multiple-choice questions."
        );
    }
}
