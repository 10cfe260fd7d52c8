//! Identity provider seam.
//!
//! DESIGN
//! ======
//! The store never talks to the identity service directly. It goes through
//! [`IdentityProvider`], which the browser client implements against Cognito
//! and tests implement with in-memory fakes. Futures are `?Send` because
//! browser HTTP futures are not `Send`; the provider value itself must still
//! be `Send + Sync` so the store can live in shared context.

use serde::{Deserialize, Serialize};

use crate::state::AuthState;

// =============================================================================
// SESSION
// =============================================================================

/// An authenticated session as returned by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireSession")]
pub struct Session {
    id_token: String,
    email: String,
}

#[derive(Deserialize)]
struct WireSession {
    id_token: String,
    email: String,
}

impl TryFrom<WireSession> for Session {
    type Error = IdentityError;

    fn try_from(wire: WireSession) -> Result<Self, Self::Error> {
        Self::new(wire.id_token, wire.email)
    }
}

impl Session {
    /// Build a session. Fails when the identity token is empty.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Malformed`] for an empty token.
    pub fn new(id_token: impl Into<String>, email: impl Into<String>) -> Result<Self, IdentityError> {
        let id_token = id_token.into();
        if id_token.is_empty() {
            return Err(IdentityError::Malformed("session has an empty identity token".to_owned()));
        }
        Ok(Self { id_token, email: email.into() })
    }

    #[must_use]
    pub fn id_token(&self) -> &str {
        &self.id_token
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The `Authenticated` state this session stands for.
    #[must_use]
    pub fn into_state(self) -> AuthState {
        AuthState::Authenticated { token: self.id_token, email: self.email }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Failure reported by an identity provider operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// The provider refused the request (duplicate account, bad code,
    /// wrong credentials, ...). `kind` is the provider's machine-readable
    /// error name; `message` is meant for the user.
    #[error("{message}")]
    Rejected { kind: String, message: String },
    /// The request never produced a provider response.
    #[error("network error: {0}")]
    Transport(String),
    /// The provider responded with something we could not interpret.
    #[error("unexpected identity response: {0}")]
    Malformed(String),
    /// Client configuration is missing or unusable.
    #[error("identity provider not configured: {0}")]
    NotConfigured(String),
}

// =============================================================================
// PROVIDER TRAIT
// =============================================================================

/// Operations the auth store needs from the identity service.
#[async_trait::async_trait(?Send)]
pub trait IdentityProvider: Send + Sync {
    /// Create an unconfirmed account.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the provider rejects the sign-up or is
    /// unreachable.
    async fn register(&self, email: &str, password: &str) -> Result<(), IdentityError>;

    /// Confirm an account with the code the provider sent out of band.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] for a wrong or expired code.
    async fn confirm_registration(&self, email: &str, code: &str) -> Result<(), IdentityError>;

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] for wrong credentials or an unconfirmed
    /// account.
    async fn authenticate(&self, email: &str, password: &str) -> Result<Session, IdentityError>;

    /// Look for a previously persisted, still-valid session.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] when a stored session exists but cannot be
    /// validated. `Ok(None)` means there is simply no session.
    async fn restore_session(&self) -> Result<Option<Session>, IdentityError>;

    /// Drop the persisted session. Remote revocation, if any, is started by
    /// the provider and not awaited.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if local session state could not be cleared.
    fn sign_out(&self) -> Result<(), IdentityError>;
}
