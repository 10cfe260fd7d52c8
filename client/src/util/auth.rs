//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use sampleapp_core::gate::{self, GateDecision};
use sampleapp_core::AuthState;

/// Path to redirect to for `state`, if any.
pub fn redirect_target(state: &AuthState) -> Option<&'static str> {
    match gate::decide(state) {
        GateDecision::Redirect(path) => Some(path),
        GateDecision::Suspend | GateDecision::Render => None,
    }
}

/// Whether protected content may render for `state`.
pub fn may_render(state: &AuthState) -> bool {
    gate::decide(state) == GateDecision::Render
}

/// Redirect to the login page whenever auth has resolved without a user.
/// Re-runs on every auth change, so a sign-out while on a protected page
/// redirects immediately.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = redirect_target(&auth.get()) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
