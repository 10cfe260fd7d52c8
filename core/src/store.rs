//! Auth state store.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AuthStore` exists per application session. The root component creates
//! it, runs [`AuthStore::restore`] once in the browser, and mirrors every
//! state change into a reactive signal through [`AuthStore::subscribe`].
//! Pages call the transition operations; the todo resource reads
//! [`AuthStore::state`] on every request.
//!
//! DESIGN
//! ======
//! The state lives in a single `Mutex` cell that is never held across an
//! `.await`. Writes replace the whole value, then listeners run synchronously
//! on the writing task, outside the lock, before the operation returns.
//!
//! Concurrent transitions are last-write-wins. `authenticate` is refused while
//! the initial restore is outstanding, and a restore result that arrives after
//! an explicit `sign_out` is dropped so `Loading` is only ever left once.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::identity::{IdentityError, IdentityProvider};
use crate::state::AuthState;

// =============================================================================
// ERRORS
// =============================================================================

/// Failure of a store operation. The wrapped provider message is what the
/// login view displays.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Registration(#[source] IdentityError),
    #[error("{0}")]
    Confirmation(#[source] IdentityError),
    #[error("{0}")]
    Authentication(#[source] IdentityError),
    /// The initial session probe has not resolved yet.
    #[error("still checking for an existing session, try again in a moment")]
    NotReady,
}

// =============================================================================
// STORE
// =============================================================================

type Listener = Arc<dyn Fn(&AuthState) + Send + Sync>;

struct StoreCell {
    state: AuthState,
    restore_started: bool,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

/// Shared handle to the authentication state. Cloning is cheap and every
/// clone sees the same state.
#[derive(Clone)]
pub struct AuthStore {
    provider: Arc<dyn IdentityProvider>,
    cell: Arc<Mutex<StoreCell>>,
}

impl AuthStore {
    /// Create a store in the `Loading` state. Call [`AuthStore::restore`]
    /// once afterwards to resolve it.
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let cell = StoreCell {
            state: AuthState::Loading,
            restore_started: false,
            listeners: Vec::new(),
            next_listener_id: 0,
        };
        Self { provider, cell: Arc::new(Mutex::new(cell)) }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.lock().state.clone()
    }

    /// Register `listener` to run after every state write.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        let mut cell = self.lock();
        let id = cell.next_listener_id;
        cell.next_listener_id += 1;
        cell.listeners.push((id, Arc::new(listener)));
        Subscription { cell: Arc::downgrade(&self.cell), id }
    }

    /// Resolve `Loading` by asking the provider for a persisted session.
    ///
    /// Runs at most once per store; later calls return immediately. Provider
    /// failures are logged and resolve to `Unauthenticated`.
    pub async fn restore(&self) {
        {
            let mut cell = self.lock();
            if cell.restore_started {
                log::debug!("auth: session restore already ran, ignoring");
                return;
            }
            cell.restore_started = true;
        }

        let next = match self.provider.restore_session().await {
            Ok(Some(session)) => {
                log::debug!("auth: restored existing session");
                session.into_state()
            }
            Ok(None) => AuthState::Unauthenticated,
            Err(e) => {
                log::warn!("auth: session restore failed: {e}");
                AuthState::Unauthenticated
            }
        };

        if !self.write(next, AuthState::is_loading) {
            log::debug!("auth: state resolved before restore finished, dropping restore result");
        }
    }

    /// Create an account. Does not change the state.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Registration`] with the provider's reason.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.provider
            .register(email, password)
            .await
            .map_err(AuthError::Registration)
    }

    /// Confirm an account. Does not change the state.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Confirmation`] for a wrong or expired code.
    pub async fn confirm(&self, email: &str, code: &str) -> Result<(), AuthError> {
        self.provider
            .confirm_registration(email, code)
            .await
            .map_err(AuthError::Confirmation)
    }

    /// Sign in. On success the state becomes `Authenticated` and subscribers
    /// have been notified by the time this returns. On failure the state is
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotReady`] while the initial restore is pending,
    /// otherwise [`AuthError::Authentication`] with the provider's reason.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if self.state().is_loading() {
            return Err(AuthError::NotReady);
        }
        let session = self
            .provider
            .authenticate(email, password)
            .await
            .map_err(AuthError::Authentication)?;
        log::debug!("auth: signed in");
        self.set_state(session.into_state());
        Ok(())
    }

    /// Sign out locally. The provider's own sign-out is best effort.
    pub fn sign_out(&self) {
        if let Err(e) = self.provider.sign_out() {
            log::warn!("auth: provider sign-out failed: {e}");
        }
        self.set_state(AuthState::Unauthenticated);
    }

    fn set_state(&self, next: AuthState) {
        self.write(next, |_| true);
    }

    /// Replace the state if `applies` accepts the current one, then notify.
    /// Returns whether the write happened.
    fn write(&self, next: AuthState, applies: impl FnOnce(&AuthState) -> bool) -> bool {
        debug_assert!(!next.is_loading(), "Loading is never re-entered");
        let listeners: Vec<Listener> = {
            let mut cell = self.lock();
            if !applies(&cell.state) {
                return false;
            }
            cell.state = next.clone();
            cell.listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect()
        };
        for listener in listeners {
            listener(&next);
        }
        true
    }

    fn lock(&self) -> MutexGuard<'_, StoreCell> {
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// SUBSCRIPTION
// =============================================================================

/// Handle returned by [`AuthStore::subscribe`]. Dropping it keeps the
/// listener registered; call [`Subscription::unsubscribe`] to remove it.
pub struct Subscription {
    cell: Weak<Mutex<StoreCell>>,
    id: u64,
}

impl Subscription {
    /// Stop delivering state changes to this listener.
    pub fn unsubscribe(self) {
        let Some(cell) = self.cell.upgrade() else {
            return;
        };
        let mut cell = cell.lock().unwrap_or_else(PoisonError::into_inner);
        cell.listeners.retain(|(id, _)| *id != self.id);
    }
}
