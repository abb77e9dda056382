//! Request builder and response parser for the breed image endpoint.
//!
//! # Design
//! `DogClient` holds only its base URL and default headers and carries no
//! mutable state between calls. The endpoint is split into
//! `build_get_breed_images`, which produces an `HttpRequest`, and
//! `parse_get_breed_images`, which consumes an `HttpResponse`. Executing the
//! request is left to a `Transport`, so this half stays deterministic.

use tracing::warn;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ApiErrorBody, BreedImageResponse};

/// Stateless descriptor for `GET /breed/{breed}/images/random/3`.
#[derive(Debug, Clone)]
pub struct DogClient {
    base_url: String,
    default_headers: Vec<(String, String)>,
}

impl DogClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_headers: config.default_headers.clone(),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(&ClientConfig::with_base_url(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `breed_name` is substituted verbatim. Callers must pass a URL-safe
    /// value; nothing is escaped or validated here.
    pub fn build_get_breed_images(&self, breed_name: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/breed/{breed_name}/images/random/3", self.base_url),
            headers: self.default_headers.clone(),
            body: None,
        }
    }

    pub fn parse_get_breed_images(&self, response: HttpResponse) -> ApiResult<BreedImageResponse> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map non-2xx statuses to `ApiError::HttpError`, preferring the message from
/// the API's error envelope over the raw body.
fn check_status(response: &HttpResponse) -> ApiResult<()> {
    if response.is_success() {
        return Ok(());
    }
    let (api_status, message) = match serde_json::from_str::<ApiErrorBody>(&response.body) {
        Ok(envelope) => (envelope.status, envelope.message),
        Err(_) => (None, response.body.clone()),
    };
    warn!(status = response.status, ?api_status, %message, "dog api returned non-success status");
    Err(ApiError::HttpError {
        status: response.status,
        message,
    })
}
