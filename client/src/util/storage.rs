//! Key/value persistence for identity tokens.
//!
//! TRADE-OFFS
//! ==========
//! The browser implementation talks to `localStorage` on every call rather
//! than holding a `web_sys::Storage`, which keeps it `Send + Sync` so the
//! identity adapter can live in shared context. Server-side rendering has no
//! storage; reads return `None` and writes are no-ops.

use sampleapp_core::IdentityError;

/// Minimal string storage used by the Cognito adapter.
pub trait TokenStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`IdentityError::Malformed`] when the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), IdentityError>;

    fn remove(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), IdentityError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()
                .ok_or_else(|| IdentityError::Malformed("localStorage unavailable".to_owned()))?;
            storage
                .set_item(key, value)
                .map_err(|_| IdentityError::Malformed(format!("could not persist {key}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
