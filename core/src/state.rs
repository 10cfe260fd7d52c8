//! Authentication state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is the single value every consumer reads: the navigation gate,
//! the header builder, and the nav bar. Exactly one variant is current at a
//! time and `Loading` only exists before the first session probe resolves.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

/// Current authentication status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case", try_from = "WireAuthState")]
pub enum AuthState {
    /// The session probe has not resolved yet.
    #[default]
    Loading,
    /// No signed-in user.
    Unauthenticated,
    /// A signed-in user with a bearer credential.
    Authenticated {
        /// Opaque identity token sent as a bearer credential. Never empty.
        token: String,
        /// Account identifier.
        email: String,
    },
}

/// Unchecked wire form; converted through [`AuthState::authenticated`].
#[derive(Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum WireAuthState {
    Loading,
    Unauthenticated,
    Authenticated { token: String, email: String },
}

impl TryFrom<WireAuthState> for AuthState {
    type Error = &'static str;

    fn try_from(wire: WireAuthState) -> Result<Self, Self::Error> {
        match wire {
            WireAuthState::Loading => Ok(Self::Loading),
            WireAuthState::Unauthenticated => Ok(Self::Unauthenticated),
            WireAuthState::Authenticated { token, email } => {
                Self::authenticated(token, email).ok_or("authenticated state has an empty token")
            }
        }
    }
}

impl AuthState {
    /// Build an `Authenticated` state, or `None` when `token` is empty.
    #[must_use]
    pub fn authenticated(token: impl Into<String>, email: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() {
            return None;
        }
        Some(Self::Authenticated { token, email: email.into() })
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Bearer token when authenticated.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    /// Account email when authenticated.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Authenticated { email, .. } => Some(email),
            _ => None,
        }
    }
}
