//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is provided through Leptos context. `auth` bridges the core
//! `AuthStore` into a signal so views re-render on every transition.

pub mod auth;
