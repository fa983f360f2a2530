//! API Configuration
//!
//! Backend origin and static file URL helpers.

use std::sync::OnceLock;

/// Backend origin used when `BOOKSTORE_API_ORIGIN` is not set at build time
const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";

/// Versioned API prefix appended to the origin
const API_PREFIX: &str = "/api/v1";

static API_CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Where the backend lives
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    origin: String,
}

impl ApiConfig {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    /// Build from the compile-time environment
    pub fn from_env() -> Self {
        Self::new(option_env!("BOOKSTORE_API_ORIGIN").unwrap_or(DEFAULT_API_ORIGIN))
    }

    /// Full URL for an API path such as `/books/1`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.origin, API_PREFIX, path)
    }

    /// URL of a file served under `/static/`
    pub fn static_file_url(&self, file_path: &str) -> String {
        format!("{}/static/{}", self.origin, file_path)
    }

    /// Resolve a stored media path (cover, sample page, audio) to a full URL.
    ///
    /// Absolute URLs pass through, `/static/...` paths are joined to the
    /// origin, anything else is treated as relative to `/static/`.
    pub fn cover_url(&self, image_path: &str) -> Option<String> {
        if image_path.is_empty() {
            return None;
        }
        if image_path.starts_with("http") {
            return Some(image_path.to_string());
        }
        if image_path.starts_with("/static/") {
            return Some(format!("{}{}", self.origin, image_path));
        }
        Some(self.static_file_url(image_path))
    }
}

/// Process-wide configuration
pub fn api_config() -> &'static ApiConfig {
    API_CONFIG.get_or_init(ApiConfig::from_env)
}

/// Shorthand for [`ApiConfig::cover_url`] on the global config
pub fn get_book_cover_url(image_path: &str) -> Option<String> {
    api_config().cover_url(image_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_prefix() {
        let config = ApiConfig::new("https://shop.example/");
        assert_eq!(config.api_url("/books/7"), "https://shop.example/api/v1/books/7");
    }

    #[test]
    fn test_cover_url_variants() {
        let config = ApiConfig::new("http://localhost:8000");
        assert_eq!(config.cover_url(""), None);
        assert_eq!(
            config.cover_url("https://cdn.example/a.jpg").as_deref(),
            Some("https://cdn.example/a.jpg")
        );
        assert_eq!(
            config.cover_url("/static/covers/a.jpg").as_deref(),
            Some("http://localhost:8000/static/covers/a.jpg")
        );
        assert_eq!(
            config.cover_url("covers/a.jpg").as_deref(),
            Some("http://localhost:8000/static/covers/a.jpg")
        );
    }
}
