//! Route guard for pages that require a signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthContext;
use crate::util::auth::{install_unauth_redirect, may_render};

/// Renders `children` only while authenticated. Renders nothing while the
/// session probe runs and navigates to the login page once it resolves
/// without a user.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let state = auth.state;
    install_unauth_redirect(state, use_navigate());

    move || may_render(&state.get()).then(|| children())
}
