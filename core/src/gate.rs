//! Protected navigation policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes wrap their content in the client's `ProtectedRoute`
//! component, which re-runs [`decide`] whenever the auth signal changes. The
//! policy itself is pure so route guards agree on it.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::state::AuthState;

/// Sign-in entry point unauthenticated users are sent to.
pub const LOGIN_PATH: &str = "/login";

/// What a protected route should do for the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Render nothing yet; the session probe is still running.
    Suspend,
    /// Navigate to the given path instead of rendering.
    Redirect(&'static str),
    /// Render the protected content.
    Render,
}

#[must_use]
pub fn decide(state: &AuthState) -> GateDecision {
    match state {
        AuthState::Loading => GateDecision::Suspend,
        AuthState::Unauthenticated => GateDecision::Redirect(LOGIN_PATH),
        AuthState::Authenticated { .. } => GateDecision::Render,
    }
}
