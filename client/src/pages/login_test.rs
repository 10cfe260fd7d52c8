use super::*;
use sampleapp_core::{AuthError, AuthState, IdentityError, IdentityProvider, Session};
use std::sync::{Arc, Mutex};

/// Provider keeping pending and confirmed accounts in memory.
#[derive(Default)]
struct FakeIdentity {
    pending: Mutex<Vec<(String, String)>>,
    confirmed: Mutex<Vec<(String, String)>>,
}

const CODE: &str = "123456";

fn rejected(kind: &str, message: &str) -> IdentityError {
    IdentityError::Rejected { kind: kind.to_owned(), message: message.to_owned() }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for FakeIdentity {
    async fn register(&self, email: &str, password: &str) -> Result<(), IdentityError> {
        if self.confirmed.lock().unwrap().iter().any(|(e, _)| e == email) {
            return Err(rejected("UsernameExistsException", "An account with the given email already exists."));
        }
        self.pending
            .lock()
            .unwrap()
            .push((email.to_owned(), password.to_owned()));
        Ok(())
    }

    async fn confirm_registration(&self, email: &str, code: &str) -> Result<(), IdentityError> {
        if code != CODE {
            return Err(rejected("CodeMismatchException", "Invalid verification code provided, please try again."));
        }
        let mut pending = self.pending.lock().unwrap();
        let idx = pending
            .iter()
            .position(|(e, _)| e == email)
            .ok_or_else(|| rejected("UserNotFoundException", "User does not exist."))?;
        let account = pending.remove(idx);
        self.confirmed.lock().unwrap().push(account);
        Ok(())
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let confirmed = self.confirmed.lock().unwrap();
        if confirmed.iter().any(|(e, p)| e == email && p == password) {
            Session::new(format!("token-for-{email}"), email)
        } else {
            Err(rejected("NotAuthorizedException", "Incorrect username or password."))
        }
    }

    async fn restore_session(&self) -> Result<Option<Session>, IdentityError> {
        Ok(None)
    }

    fn sign_out(&self) -> Result<(), IdentityError> {
        Ok(())
    }
}

async fn ready_store() -> (AuthStore, Arc<FakeIdentity>) {
    let identity = Arc::new(FakeIdentity::default());
    let store = AuthStore::new(identity.clone());
    store.restore().await;
    (store, identity)
}

// =========================================================================
// Mode
// =========================================================================

#[test]
fn toggle_swaps_sign_in_and_sign_up() {
    assert_eq!(LoginMode::SignIn.toggled(), LoginMode::SignUp);
    assert_eq!(LoginMode::SignUp.toggled(), LoginMode::SignIn);
    assert_eq!(LoginMode::Confirm.toggled(), LoginMode::Confirm);
}

#[test]
fn confirm_step_labels() {
    assert_eq!(LoginMode::Confirm.heading(), "Confirm Email");
    assert_eq!(LoginMode::Confirm.submit_label(), "Confirm & Sign In");
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn credentials_trim_email_but_not_password() {
    let (email, password) = validate_credentials("  a@x.com ", " pw ").unwrap();
    assert_eq!(email, "a@x.com");
    assert_eq!(password, " pw ");
}

#[test]
fn credentials_require_both_fields() {
    assert!(validate_credentials("", "pw").is_err());
    assert!(validate_credentials("   ", "pw").is_err());
    assert!(validate_credentials("a@x.com", "").is_err());
}

#[test]
fn code_is_trimmed_and_required() {
    assert_eq!(validate_code(" 123456 ").unwrap(), "123456");
    assert!(validate_code("  ").is_err());
}

// =========================================================================
// Submit sequencing
// =========================================================================

#[tokio::test]
async fn sign_up_then_confirm_ends_authenticated() {
    let (store, _) = ready_store().await;

    let outcome = submit(&store, LoginMode::SignUp, "a@x.com", "Secret1!", "").await;
    assert_eq!(outcome, Ok(SubmitOutcome::AwaitConfirmation));
    assert_eq!(store.state(), AuthState::Unauthenticated);

    let outcome = submit(&store, LoginMode::Confirm, "a@x.com", "Secret1!", CODE).await;
    assert_eq!(outcome, Ok(SubmitOutcome::SignedIn));
    assert_eq!(store.state().token(), Some("token-for-a@x.com"));
}

#[tokio::test]
async fn wrong_code_surfaces_provider_message() {
    let (store, identity) = ready_store().await;
    submit(&store, LoginMode::SignUp, "a@x.com", "pw", "").await.unwrap();

    let err = submit(&store, LoginMode::Confirm, "a@x.com", "pw", "000000")
        .await
        .unwrap_err();
    assert_eq!(err, "Invalid verification code provided, please try again.");
    assert_eq!(store.state(), AuthState::Unauthenticated);
    assert_eq!(identity.pending.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn sign_in_with_bad_password_keeps_state() {
    let (store, _) = ready_store().await;
    let err = submit(&store, LoginMode::SignIn, "a@x.com", "nope", "")
        .await
        .unwrap_err();
    assert_eq!(err, "Incorrect username or password.");
    assert_eq!(store.state(), AuthState::Unauthenticated);
}

#[tokio::test]
async fn blank_fields_never_reach_the_provider() {
    let (store, identity) = ready_store().await;
    let err = submit(&store, LoginMode::SignUp, " ", "pw", "").await.unwrap_err();
    assert_eq!(err, "Enter both email and password.");
    assert!(identity.pending.lock().unwrap().is_empty());
}

#[tokio::test]
async fn submit_while_loading_is_refused() {
    let identity = Arc::new(FakeIdentity::default());
    identity
        .confirmed
        .lock()
        .unwrap()
        .push(("a@x.com".to_owned(), "pw".to_owned()));
    let store = AuthStore::new(identity);

    let err = submit(&store, LoginMode::SignIn, "a@x.com", "pw", "").await.unwrap_err();
    assert_eq!(err, AuthError::NotReady.to_string());
    assert!(store.state().is_loading());
}
