//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use sampleapp_core::AuthStore;

use crate::components::nav_bar::NavBar;
use crate::config::ClientConfig;
use crate::net::cognito::CognitoIdentity;
use crate::pages::{about::AboutPage, home::HomePage, login::LoginPage, todo::TodoPage};
use crate::state::auth::AuthContext;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the auth store over the Cognito adapter, provides it with the
/// client config, and starts the one-time session restore in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let identity = CognitoIdentity::new(config.clone(), Arc::new(BrowserStorage));
    let auth = AuthContext::new(AuthStore::new(Arc::new(identity)));

    // SSR always renders the Loading state; only the browser can see tokens.
    #[cfg(feature = "hydrate")]
    {
        let store = auth.store.clone();
        leptos::task::spawn_local(async move { store.restore().await });
    }

    provide_context(config);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/sampleapp.css"/>
        <Title text="SampleApp"/>

        <Router>
            <NavBar/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("todo") view=TodoPage/>
                </Routes>
            </main>
        </Router>
    }
}
