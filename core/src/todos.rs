//! Todo resource: wire types and list/create/delete operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server serializes [`Todo`] and deserializes [`NewTodo`]; the client's
//! todo page drives [`TodoResource`]. Every request carries headers built from
//! the auth store's state at send time. Mutations never patch a local copy:
//! callers re-run [`TodoResource::list`] after a successful create or remove.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use serde::{Deserialize, Serialize};

use crate::headers::build_headers;
use crate::store::AuthStore;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Method};

pub const TODOS_PATH: &str = "/api/todos";

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-assigned identifier.
    pub id: i64,
    pub title: String,
}

/// Body of `POST /api/todos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    /// Rejected before sending: the title is empty or whitespace.
    #[error("todo title must not be empty")]
    EmptyTitle,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

// =============================================================================
// RESOURCE
// =============================================================================

/// Todo collection client bound to an API base URL and the auth store.
pub struct TodoResource<T> {
    base_url: String,
    auth: AuthStore,
    transport: T,
}

impl<T: HttpTransport> TodoResource<T> {
    /// `base_url` may be empty for same-origin requests.
    pub fn new(base_url: impl Into<String>, auth: AuthStore, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, auth, transport }
    }

    #[must_use]
    pub fn collection_url(&self) -> String {
        format!("{}{TODOS_PATH}", self.base_url)
    }

    #[must_use]
    pub fn item_url(&self, id: i64) -> String {
        format!("{}{TODOS_PATH}/{id}", self.base_url)
    }

    /// Fetch the full collection.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] on network failure, a non-2xx status, or an
    /// undecodable body.
    pub async fn list(&self) -> Result<Vec<Todo>, ResourceError> {
        let response = self.send(Method::Get, self.collection_url(), None).await?;
        decode(&response)
    }

    /// Create a todo. Blank titles are rejected without a request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyTitle`] for a blank title, otherwise the
    /// same failures as [`TodoResource::list`].
    pub async fn create(&self, title: &str) -> Result<Todo, ResourceError> {
        if title.trim().is_empty() {
            return Err(ResourceError::EmptyTitle);
        }
        let body = serde_json::json!({ "title": title }).to_string();
        let response = self
            .send(Method::Post, self.collection_url(), Some(body))
            .await?;
        decode(&response)
    }

    /// Delete a todo by id.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] on network failure or a non-2xx status
    /// (including 404 for an unknown id).
    pub async fn remove(&self, id: i64) -> Result<(), ResourceError> {
        self.send(Method::Delete, self.item_url(id), None).await?;
        Ok(())
    }

    async fn send(&self, method: Method, url: String, body: Option<String>) -> Result<ApiResponse, ResourceError> {
        let request = ApiRequest { method, url, headers: build_headers(&self.auth.state()), body };
        log::debug!("todos: {} {}", request.method, request.url);
        let response = self
            .transport
            .send(request)
            .await
            .map_err(ResourceError::Transport)?;
        if !response.is_success() {
            return Err(ResourceError::Status { status: response.status, body: response.body });
        }
        Ok(response)
    }
}

fn decode<D: serde::de::DeserializeOwned>(response: &ApiResponse) -> Result<D, ResourceError> {
    serde_json::from_str(&response.body).map_err(|e| ResourceError::Decode(e.to_string()))
}
