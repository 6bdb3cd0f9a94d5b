//! Runtime Configuration
//!
//! Read from `<meta>` tags in the host page at startup. The bearer token is
//! never part of the config: it is looked up in browser storage on every
//! request.

use crate::error::AdminError;
use crate::models::Endpoint;

pub const META_API_BASE: &str = "admin-api-base";
pub const META_TOKEN_KEY: &str = "admin-token-key";
pub const META_REFRESH: &str = "admin-refresh";

pub const DEFAULT_TOKEN_KEY: &str = "access_token";

/// What happens after a successful create/update/delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshStrategy {
    /// Re-fetch only the affected list
    #[default]
    RefetchList,
    /// Reload the whole page
    FullPage,
}

impl RefreshStrategy {
    fn from_meta(value: &str) -> Self {
        match value.trim() {
            "page" => RefreshStrategy::FullPage,
            _ => RefreshStrategy::RefetchList,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Prefix for every API path, without trailing slash. Empty = same origin.
    pub base_url: String,
    /// Storage key holding the bearer token
    pub token_key: String,
    pub refresh: RefreshStrategy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            refresh: RefreshStrategy::default(),
        }
    }
}

impl ApiConfig {
    /// Build from a meta-tag lookup. Missing or blank tags keep defaults.
    pub fn from_meta(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            base_url: non_blank(META_API_BASE)
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            token_key: non_blank(META_TOKEN_KEY)
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.token_key),
            refresh: non_blank(META_REFRESH)
                .map(|v| RefreshStrategy::from_meta(&v))
                .unwrap_or(defaults.refresh),
        }
    }

    /// Read the current document's meta tags
    pub fn from_document() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        Self::from_meta(|name| {
            document
                .as_ref()?
                .query_selector(&format!("meta[name='{}']", name))
                .ok()
                .flatten()?
                .get_attribute("content")
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Token source bound to this config's storage key
    pub fn token_source(&self) -> BrowserStorageToken {
        BrowserStorageToken {
            key: self.token_key.clone(),
        }
    }
}

/// Where the bearer credential comes from
pub trait TokenSource {
    fn bearer_token(&self) -> Option<String>;

    /// Name shown when no token is found
    fn describe(&self) -> String;
}

/// Token kept by the login page in `sessionStorage`, falling back to `localStorage`
#[derive(Debug, Clone)]
pub struct BrowserStorageToken {
    key: String,
}

impl TokenSource for BrowserStorageToken {
    fn bearer_token(&self) -> Option<String> {
        let window = web_sys::window()?;
        let from = |storage: Option<web_sys::Storage>| storage?.get_item(&self.key).ok().flatten();
        from(window.session_storage().ok().flatten())
            .or_else(|| from(window.local_storage().ok().flatten()))
    }

    fn describe(&self) -> String {
        self.key.clone()
    }
}

/// `Authorization` header value, resolved at request time
pub fn authorization_header(source: &impl TokenSource) -> Result<String, AdminError> {
    source
        .bearer_token()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {}", t))
        .ok_or_else(|| AdminError::MissingCredential(source.describe()))
}

/// Endpoint named by a `/items/{endpoint}` page path
pub fn endpoint_from_path(path: &str) -> Option<Endpoint> {
    let mut segments = path.trim_matches('/').split('/');
    while let Some(segment) = segments.next() {
        if segment == "items" {
            return segments.next().and_then(Endpoint::from_str);
        }
    }
    None
}

/// Endpoint for the current page, if its path names one
pub fn endpoint_from_location() -> Option<Endpoint> {
    let path = web_sys::window()?.location().pathname().ok()?;
    endpoint_from_path(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedToken(Option<&'static str>);

    impl TokenSource for FixedToken {
        fn bearer_token(&self) -> Option<String> {
            self.0.map(str::to_string)
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    fn meta(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_config_defaults_when_no_meta() {
        let config = ApiConfig::from_meta(|_| None);
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.url("/api/general/level"), "/api/general/level");
    }

    #[test]
    fn test_config_reads_meta_tags() {
        let config = ApiConfig::from_meta(meta(&[
            (META_API_BASE, "http://127.0.0.1:5000/"),
            (META_TOKEN_KEY, "jwt"),
            (META_REFRESH, "page"),
        ]));
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.token_key, "jwt");
        assert_eq!(config.refresh, RefreshStrategy::FullPage);
        assert_eq!(config.url("/api/question/4"), "http://127.0.0.1:5000/api/question/4");
    }

    #[test]
    fn test_blank_meta_keeps_default() {
        let config = ApiConfig::from_meta(meta(&[(META_TOKEN_KEY, "  "), (META_REFRESH, "bogus")]));
        assert_eq!(config.token_key, DEFAULT_TOKEN_KEY);
        assert_eq!(config.refresh, RefreshStrategy::RefetchList);
    }

    #[test]
    fn test_authorization_header() {
        assert_eq!(
            authorization_header(&FixedToken(Some(" abc.def "))).unwrap(),
            "Bearer abc.def"
        );
        assert_eq!(
            authorization_header(&FixedToken(None)),
            Err(AdminError::MissingCredential("fixed".to_string()))
        );
        assert!(authorization_header(&FixedToken(Some(""))).is_err());
    }

    #[test]
    fn test_endpoint_from_path() {
        assert_eq!(endpoint_from_path("/items/section"), Some(Endpoint::Section));
        assert_eq!(endpoint_from_path("/api/general/items/question/"), Some(Endpoint::Question));
        assert_eq!(endpoint_from_path("/items/questionChoice"), None);
        assert_eq!(endpoint_from_path("/dashboard"), None);
    }
}
