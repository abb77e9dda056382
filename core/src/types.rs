//! Response DTOs for the Dog CEO API.
//!
//! # Design
//! The API wraps every payload in `{"message": ..., "status": ...}`. The
//! breed image endpoint puts the URL list in `message`; it is exposed here
//! as `images`. A `message` that is missing or not an array is rejected at
//! decode time instead of collapsing to an empty list. `status` is never
//! inspected, so a missing or `null` value decodes to `None`.

use serde::Deserialize;

/// Decoded body of `GET /breed/{breed}/images/random/3`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BreedImageResponse {
    #[serde(rename = "message")]
    images: Vec<String>,
    status: Option<String>,
}

impl BreedImageResponse {
    pub fn new(images: Vec<String>, status: Option<String>) -> Self {
        Self { images, status }
    }

    /// Image URLs in the order the API returned them.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn into_images(self) -> Vec<String> {
        self.images
    }
}

/// Error envelope sent alongside non-2xx statuses, e.g.
/// `{"status":"error","message":"Breed not found (main breed does not exist)","code":404}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub status: Option<String>,
    pub message: String,
}
