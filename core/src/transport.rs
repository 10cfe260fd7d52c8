//! HTTP transport seam for the todo resource.
//!
//! DESIGN
//! ======
//! The browser implements [`HttpTransport`] with `gloo-net`; the server's
//! end-to-end tests implement it with `reqwest`. Requests and responses are
//! plain data so the resource logic stays independent of either client.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends [`ApiRequest`]s. `Err` means no HTTP response was obtained.
#[async_trait::async_trait(?Send)]
pub trait HttpTransport {
    /// # Errors
    ///
    /// Returns a description of the network failure.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String>;
}
