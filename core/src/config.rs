//! Client configuration.
//!
//! The base URL and default headers live in an explicit value handed to the
//! client at construction, not in a process-wide client instance.

/// Base URL used when the caller does not supply one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Immutable settings shared by every request a client builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Configuration for `base_url` with the default JSON content-type header.
    /// A trailing `/` is dropped so paths can be appended directly.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
        }
    }

    /// Add a header sent with every request.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
