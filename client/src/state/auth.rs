//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the nav bar, and the login page. The store is the
//! single writer; `state` is a read mirror kept current by a store
//! subscription, so every transition reaches the view layer synchronously in
//! the same task turn as the write.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use sampleapp_core::{AuthState, AuthStore};

/// Store handle plus its reactive mirror, provided as context by `App`.
#[derive(Clone)]
pub struct AuthContext {
    pub store: AuthStore,
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    /// Wrap `store` and start mirroring its state into a signal. The mirror
    /// lives as long as the store.
    #[must_use]
    pub fn new(store: AuthStore) -> Self {
        let state = RwSignal::new(store.state());
        // Dropping the handle keeps the listener registered.
        let _mirror = store.subscribe(move |next| state.set(next.clone()));
        Self { store, state }
    }

    /// Whether sign-in forms may submit: not before the session probe resolves.
    pub fn is_ready(&self) -> bool {
        !self.state.get().is_loading()
    }
}
