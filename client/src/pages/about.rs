//! Static description of the application and its stack.

use leptos::prelude::*;

const STACK: [&str; 4] = ["Rust", "Leptos", "Axum", "Cognito"];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div>
            <h1>"About"</h1>
            <div class="card">
                <p>"This app demonstrates a small Rust web application with user accounts."</p>
                <p>"It includes navigation, a todo list backed by a REST API, and sign-in through a hosted identity service."</p>
                <div class="tech-tags">
                    {STACK.iter().map(|tech| view! { <span class="tech-tag">{*tech}</span> }).collect_view()}
                </div>
            </div>
        </div>
    }
}
