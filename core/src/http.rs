//! HTTP transport types shared by the endpoint descriptor and transports.
//!
//! # Design
//! Requests and responses are plain data. `DogClient` builds an `HttpRequest`
//! and parses an `HttpResponse` without touching the network; a `Transport`
//! performs the round-trip in between. Tests can therefore exercise the
//! descriptor with hand-written responses and no server.

use std::fmt;

/// HTTP method for a request. The Dog CEO API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute: the client's base address with the endpoint path
/// already substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Transports return non-2xx responses here as well; interpreting the status
/// is the descriptor's job.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
