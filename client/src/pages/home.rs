//! Landing page with links to the todo list and the about page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <h1>"Welcome to SampleApp"</h1>
            <p class="home-lede">"A small Leptos + Axum application with user accounts."</p>
            <div class="home-cards">
                <A href="/todo">
                    <div class="card card--link">
                        <h3>"Todo List"</h3>
                        <p>"Manage your tasks with a simple todo list."</p>
                    </div>
                </A>
                <A href="/about">
                    <div class="card card--link">
                        <h3>"About"</h3>
                        <p>"Learn more about this application."</p>
                    </div>
                </A>
            </div>
        </div>
    }
}
