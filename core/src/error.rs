//! Error types for the Dog CEO client.
//!
//! # Design
//! Three coarse categories, one per place a call can fail: getting bytes on
//! and off the wire, the server answering with a non-2xx status, and the body
//! not matching the expected shape. Nothing in the core recovers from any of
//! them; they surface to whoever invoked the operation.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by `DogClient`, `Transport` and `DogService`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, reset, bad URL).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned a non-2xx status. `message` comes from the API's
    /// error envelope when present, otherwise it is the raw body.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}
