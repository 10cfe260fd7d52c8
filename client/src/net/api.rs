//! REST transport for the todo API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): requests fail with an error since these endpoints are
//! only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become `Err(String)` and surface as
//! `ResourceError::Transport` on the todo page; nothing panics.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use sampleapp_core::{ApiRequest, ApiResponse, AuthStore, HttpTransport, TodoResource};

use crate::config::ClientConfig;

/// `gloo-net` implementation of [`HttpTransport`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use sampleapp_core::Method;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let outgoing = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| e.to_string())?;
            let response = outgoing.send().await.map_err(|e| e.to_string())?;
            let status = response.status();
            let body = response.text().await.map_err(|e| e.to_string())?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_unavailable_message(&request))
        }
    }
}

/// Todo resource bound to the configured API origin and the shared store.
#[must_use]
pub fn todo_resource(store: AuthStore, config: &ClientConfig) -> TodoResource<BrowserTransport> {
    TodoResource::new(config.api_url.clone(), store, BrowserTransport)
}

#[cfg_attr(feature = "hydrate", allow(dead_code))]
fn server_unavailable_message(request: &ApiRequest) -> String {
    format!("{} {} is not available on the server", request.method, request.url)
}
