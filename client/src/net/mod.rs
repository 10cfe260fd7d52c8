//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` carries todo REST calls through `gloo-net`; `cognito` talks to the
//! identity provider.

pub mod api;
pub mod cognito;
