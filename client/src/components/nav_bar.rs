//! Top navigation bar with the signed-in user's email and a sign-out action.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;

use crate::state::auth::AuthContext;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let state = auth.state;
    let store = auth.store.clone();

    let on_sign_out = move |_| store.sign_out();

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="logo">"SampleApp"</A>
                <A href="/" attr:class="nav-link">"Home"</A>
                <A href="/about" attr:class="nav-link">"About"</A>
                <A href="/todo" attr:class="nav-link">"Todo"</A>
                <div class="nav-auth">
                    {move || match state.get().email() {
                        Some(email) => {
                            let on_sign_out = on_sign_out.clone();
                            view! {
                                <span class="nav-user">{email.to_owned()}</span>
                                <button class="btn btn-secondary" on:click=on_sign_out>
                                    "Sign Out"
                                </button>
                            }
                                .into_any()
                        }
                        None => view! { <A href="/login" attr:class="nav-link">"Sign In"</A> }.into_any(),
                    }}
                </div>
            </div>
        </nav>
    }
}
