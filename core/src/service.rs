//! `DogService` binds the endpoint descriptor to a transport.
//!
//! # Design
//! The service is constructed once with fixed configuration and passed by
//! reference (or behind an `Arc`) to whatever needs it. Every call is
//! one-shot: build, execute, parse. There is no retry, caching or timeout
//! layer, and no state is shared between calls.

use tracing::debug;

use crate::client::DogClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::transport::Transport;
use crate::types::BreedImageResponse;

#[cfg(feature = "reqwest")]
use crate::transport::ReqwestTransport;

#[derive(Debug, Clone)]
pub struct DogService<T> {
    client: DogClient,
    transport: T,
}

impl<T: Transport> DogService<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self {
            client: DogClient::new(config),
            transport,
        }
    }

    pub fn client(&self) -> &DogClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch three random images for `breed_name`.
    ///
    /// Transport, status and decode failures are all returned unchanged.
    pub async fn get_breed_images(&self, breed_name: &str) -> ApiResult<BreedImageResponse> {
        let request = self.client.build_get_breed_images(breed_name);
        debug!(method = %request.method, url = %request.url, "sending dog api request");
        let response = self.transport.execute(request).await?;
        debug!(status = response.status, "received dog api response");
        self.client.parse_get_breed_images(response)
    }
}

#[cfg(feature = "reqwest")]
impl DogService<ReqwestTransport> {
    /// Service over a fresh `reqwest` client.
    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        Ok(Self::new(config, ReqwestTransport::new()?))
    }
}
