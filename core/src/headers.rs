//! Request headers for the todo API.
//!
//! The header set is rebuilt from the current auth state on every request;
//! the token may have changed between calls so nothing is cached.

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;

use crate::state::AuthState;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Header name/value pairs for a todo API request.
#[must_use]
pub fn build_headers(state: &AuthState) -> Vec<(&'static str, String)> {
    let mut headers = vec![(CONTENT_TYPE, JSON_CONTENT_TYPE.to_owned())];
    if let Some(token) = state.token() {
        headers.push((AUTHORIZATION, bearer(token)));
    }
    headers
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
