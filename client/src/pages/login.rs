//! Login page: sign in, sign up, and email confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-up is a three-step sequence driven from this page, not the store:
//! register, confirm with the emailed code, then authenticate with the
//! email/password captured at sign-up. Those credentials stay in the page's
//! signals while the confirm step is shown and are dropped with the page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use sampleapp_core::AuthStore;

use crate::state::auth::AuthContext;

/// Where a successful sign-in lands.
pub const AFTER_SIGN_IN_PATH: &str = "/todo";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginMode {
    SignIn,
    SignUp,
    Confirm,
}

impl LoginMode {
    pub fn heading(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
            Self::Confirm => "Confirm Email",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
            Self::Confirm => "Confirm & Sign In",
        }
    }

    /// Switch between sign-in and sign-up. The confirm step has no toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
            Self::Confirm => Self::Confirm,
        }
    }
}

/// Result of a successful form submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Account created; show the confirmation-code step.
    AwaitConfirmation,
    /// Signed in; leave the page.
    SignedIn,
}

pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub(crate) fn validate_code(code: &str) -> Result<String, &'static str> {
    let code = code.trim();
    if code.is_empty() {
        return Err("Enter the verification code.");
    }
    Ok(code.to_owned())
}

/// Run the store operations for one submission in `mode`. Errors are the
/// message to show inline.
pub(crate) async fn submit(
    store: &AuthStore,
    mode: LoginMode,
    email: &str,
    password: &str,
    code: &str,
) -> Result<SubmitOutcome, String> {
    let (email, password) = validate_credentials(email, password).map_err(str::to_owned)?;
    match mode {
        LoginMode::SignUp => {
            store
                .register(&email, &password)
                .await
                .map_err(|e| e.to_string())?;
            Ok(SubmitOutcome::AwaitConfirmation)
        }
        LoginMode::Confirm => {
            let code = validate_code(code).map_err(str::to_owned)?;
            store
                .confirm(&email, &code)
                .await
                .map_err(|e| e.to_string())?;
            store
                .authenticate(&email, &password)
                .await
                .map_err(|e| e.to_string())?;
            Ok(SubmitOutcome::SignedIn)
        }
        LoginMode::SignIn => {
            store
                .authenticate(&email, &password)
                .await
                .map_err(|e| e.to_string())?;
            Ok(SubmitOutcome::SignedIn)
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let state = auth.state;
    let store = auth.store.clone();
    let navigate = use_navigate();

    let mode = RwSignal::new(LoginMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || state.get_untracked().is_loading() {
            return;
        }
        error.set(String::new());
        busy.set(true);

        let store = store.clone();
        let navigate = navigate.clone();
        let current = mode.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let code_value = code.get_untracked();
        leptos::task::spawn_local(async move {
            let outcome = submit(&store, current, &email_value, &password_value, &code_value).await;
            busy.set(false);
            match outcome {
                Ok(SubmitOutcome::AwaitConfirmation) => mode.set(LoginMode::Confirm),
                Ok(SubmitOutcome::SignedIn) => {
                    password.set(String::new());
                    code.set(String::new());
                    navigate(AFTER_SIGN_IN_PATH, NavigateOptions::default());
                }
                Err(message) => error.set(message),
            }
        });
    };

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        mode.update(|m| *m = m.toggled());
        error.set(String::new());
    };

    let ready = auth.clone();
    let submit_disabled = move || busy.get() || !ready.is_ready();

    view! {
        <div>
            <h1>{move || mode.get().heading()}</h1>
            <div class="card login-card">
                <form class="login-form" on:submit=on_submit>
                    <Show
                        when=move || mode.get() != LoginMode::Confirm
                        fallback=move || {
                            view! {
                                <p class="login-message">
                                    "A verification code has been sent to "
                                    <strong>{move || email.get()}</strong>
                                </p>
                                <input
                                    type="text"
                                    placeholder="Verification code"
                                    required
                                    prop:value=move || code.get()
                                    on:input=move |ev| code.set(event_target_value(&ev))
                                />
                            }
                        }
                    >
                        <input
                            type="text"
                            placeholder="Email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </Show>

                    <Show when=move || !error.get().is_empty()>
                        <p class="login-error">{move || error.get()}</p>
                    </Show>

                    <button type="submit" class="btn btn-primary" disabled=submit_disabled>
                        {move || if busy.get() { "..." } else { mode.get().submit_label() }}
                    </button>
                </form>

                <Show when=move || mode.get() != LoginMode::Confirm>
                    <p class="login-switch">
                        {move || {
                            if mode.get() == LoginMode::SignIn {
                                "Don't have an account? "
                            } else {
                                "Already have an account? "
                            }
                        }}
                        <a href="#" on:click=on_toggle>
                            {move || mode.get().toggled().heading()}
                        </a>
                    </p>
                </Show>
            </div>
        </div>
    }
}
