//! Typed client core for the Dog CEO breed image API.
//!
//! # Overview
//! `DogClient` describes `GET /breed/{breed}/images/random/3`: it builds an
//! `HttpRequest` and parses an `HttpResponse` without touching the network.
//! `DogService` binds that descriptor to a `Transport` and exposes the one
//! async operation, `get_breed_images`.
//!
//! # Design
//! - `DogClient` is stateless; it holds only the base URL and default headers.
//! - The I/O boundary is the `Transport` trait. `ReqwestTransport` (feature
//!   `reqwest`, on by default) is the production implementation; tests plug
//!   in canned transports.
//! - Failures are never translated here: transport, status and decode errors
//!   reach the caller as `ApiError`.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;

pub use client::DogClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::DogService;
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use transport::Transport;
pub use types::BreedImageResponse;
