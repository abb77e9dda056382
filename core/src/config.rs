//! Client configuration: base address and default headers.
//!
//! Both are fixed at construction and never change per call.

use std::env;

/// Public Dog CEO API origin.
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Overrides `DEFAULT_BASE_URL` when set, e.g. to point at the mock server.
pub const BASE_URL_ENV: &str = "DOG_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub default_headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_headers: vec![("content-type".to_string(), "application/json".to_string())],
        }
    }
}

impl ClientConfig {
    /// Default configuration with a different base address.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Default configuration, with the base address taken from
    /// `DOG_API_BASE_URL` when it is set and non-empty.
    pub fn from_env() -> Self {
        Self::from_base_url_var(env::var(BASE_URL_ENV).ok())
    }

    fn from_base_url_var(value: Option<String>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(base_url) => Self::with_base_url(base_url.trim()),
            None => Self::default(),
        }
    }
}
