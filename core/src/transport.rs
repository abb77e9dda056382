//! The network seam between building a request and parsing its response.
//!
//! # Design
//! `Transport` is the only place that performs I/O. Implementations must
//! hand back non-2xx responses as `HttpResponse` values and reserve
//! `ApiError::Transport` for requests that produced no response at all.
//! The returned future is `Send` so a `DogService` can be driven from
//! multi-threaded runtimes and axum handlers.

use std::future::Future;
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
#[cfg(feature = "reqwest")]
use crate::http::HttpMethod;
use crate::http::{HttpRequest, HttpResponse};

/// Executes an `HttpRequest` and returns the raw response.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> impl Future<Output = ApiResult<HttpResponse>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn execute(&self, request: HttpRequest) -> impl Future<Output = ApiResult<HttpResponse>> + Send {
        (**self).execute(request)
    }
}

/// `Transport` backed by a shared `reqwest::Client`.
///
/// Cloning is cheap; clones share one connection pool.
#[cfg(feature = "reqwest")]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "reqwest")]
impl ReqwestTransport {
    pub fn new() -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "reqwest")]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
        };

        let mut builder = self.client.request(method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
