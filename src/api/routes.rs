//! API Routes
//!
//! Method and path for every call the dashboard makes.

use crate::models::Endpoint;
use crate::payload::FormMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: HttpMethod,
    pub path: String,
}

impl Route {
    fn new(method: HttpMethod, path: String) -> Self {
        Self { method, path }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method.as_str(), self.path)
    }
}

pub fn list_route(endpoint: Endpoint) -> Route {
    Route::new(HttpMethod::Get, format!("/api/general/{}", endpoint.as_str()))
}

pub fn fetch_route(endpoint: Endpoint, id: u32) -> Route {
    Route::new(HttpMethod::Get, format!("/api/general/{}/{}", endpoint.as_str(), id))
}

pub fn delete_route(endpoint: Endpoint, id: u32) -> Route {
    Route::new(HttpMethod::Delete, format!("/api/general/{}/{}", endpoint.as_str(), id))
}

/// Create/update route. Questions go through the question API; the section
/// id is only used when creating.
pub fn submit_route(endpoint: Endpoint, mode: FormMode, section_id: Option<i64>) -> Route {
    match (endpoint, mode) {
        (Endpoint::Question, FormMode::Create) => {
            let path = match section_id {
                Some(id) => format!("/api/question?section_id={}", id),
                None => "/api/question".to_string(),
            };
            Route::new(HttpMethod::Post, path)
        }
        (Endpoint::Question, FormMode::Edit(id)) => {
            Route::new(HttpMethod::Put, format!("/api/question/{}", id))
        }
        (_, FormMode::Create) => {
            Route::new(HttpMethod::Post, format!("/api/general/{}", endpoint.as_str()))
        }
        (_, FormMode::Edit(id)) => {
            Route::new(HttpMethod::Put, format!("/api/general/{}/{}", endpoint.as_str(), id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_routes() {
        assert_eq!(
            submit_route(Endpoint::Question, FormMode::Create, Some(3)).to_string(),
            "POST /api/question?section_id=3"
        );
        assert_eq!(
            submit_route(Endpoint::Question, FormMode::Edit(17), Some(3)).to_string(),
            "PUT /api/question/17"
        );
    }

    #[test]
    fn test_general_routes() {
        assert_eq!(
            submit_route(Endpoint::Level, FormMode::Create, None).to_string(),
            "POST /api/general/level"
        );
        assert_eq!(
            submit_route(Endpoint::Section, FormMode::Edit(8), None).to_string(),
            "PUT /api/general/section/8"
        );
        assert_eq!(fetch_route(Endpoint::Question, 5).to_string(), "GET /api/general/question/5");
        assert_eq!(list_route(Endpoint::Section).to_string(), "GET /api/general/section");
    }

    #[test]
    fn test_delete_goes_through_general_api_for_every_kind() {
        assert_eq!(
            delete_route(Endpoint::Question, 42),
            Route {
                method: HttpMethod::Delete,
                path: "/api/general/question/42".to_string()
            }
        );
        assert_eq!(delete_route(Endpoint::Level, 1).path, "/api/general/level/1");
    }
}
