//! Remote API Bindings
//!
//! Endpoint configuration and the HTTP transport used by the store.

mod transport;

pub use transport::*;

/// Fixed API host
pub const API_BASE_URL: &str = "https://sampleapi.com";
/// Records collection path
pub const RECORDS_PATH: &str = "/path";

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Where the records live
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(API_BASE_URL, RECORDS_PATH)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: path.into(),
        }
    }

    /// Full URL of the records endpoint
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(ApiConfig::default().endpoint(), "https://sampleapi.com/path");
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        assert_eq!(ApiConfig::new("http://localhost:8080/", "/posts").endpoint(), "http://localhost:8080/posts");
        assert_eq!(ApiConfig::new("http://localhost:8080", "posts").endpoint(), "http://localhost:8080/posts");
    }
}
