//! Todo page: add, list, and delete todos for the signed-in user.
//!
//! Every operation builds a fresh resource so the bearer header reflects the
//! auth state at request time. After each create or delete the list is
//! fetched again rather than patched locally.

#[cfg(test)]
#[path = "todo_test.rs"]
mod todo_test;

use leptos::prelude::*;
use sampleapp_core::{ResourceError, Todo};

use crate::components::protected_route::ProtectedRoute;
use crate::config::ClientConfig;
use crate::net::api::todo_resource;
use crate::state::auth::AuthContext;

pub const EMPTY_TEXT: &str = "No todos yet. Add one above!";

/// Inline error text for a failed operation. Blank titles are ignored
/// silently, matching an input that simply refuses to submit.
pub(crate) fn error_text(err: &ResourceError) -> Option<String> {
    match err {
        ResourceError::EmptyTitle => None,
        other => Some(other.to_string()),
    }
}

#[component]
pub fn TodoPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <TodoList />
        </ProtectedRoute>
    }
}

#[component]
fn TodoList() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let config = expect_context::<ClientConfig>();

    let todos = RwSignal::new(Vec::<Todo>::new());
    let title = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let ops = TodoOps { auth, config, todos, error };

    let initial = ops.clone();
    Effect::new(move || initial.reload());

    let on_submit = {
        let ops = ops.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let value = title.get_untracked();
            ops.create(value, title);
        }
    };

    let remove_ops = ops;

    view! {
        <div>
            <h1>"Todo List"</h1>
            <form class="todo-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Add a new todo..."
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Add"</button>
            </form>

            <Show when=move || error.get().is_some()>
                <p class="todo-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !todos.get().is_empty()
                fallback=|| view! { <p class="todo-empty">{EMPTY_TEXT}</p> }
            >
                <ul class="todo-list">
                    <For
                        each=move || todos.get()
                        key=|todo| todo.id
                        children={
                            let remove_ops = remove_ops.clone();
                            move |todo: Todo| {
                                let ops = remove_ops.clone();
                                let id = todo.id;
                                view! {
                                    <li class="todo-item">
                                        <span>{todo.title}</span>
                                        <button
                                            class="btn btn-danger"
                                            on:click=move |_| ops.remove(id)
                                        >
                                            "Delete"
                                        </button>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

/// Signals and collaborators shared by the page's event handlers.
#[derive(Clone)]
struct TodoOps {
    auth: AuthContext,
    config: ClientConfig,
    todos: RwSignal<Vec<Todo>>,
    error: RwSignal<Option<String>>,
}

impl TodoOps {
    fn reload(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move { this.refresh().await });
    }

    async fn refresh(&self) {
        match todo_resource(self.auth.store.clone(), &self.config).list().await {
            Ok(list) => {
                self.todos.set(list);
                self.error.set(None);
            }
            Err(e) => self.fail("list", &e),
        }
    }

    fn create(&self, value: String, title: RwSignal<String>) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            let resource = todo_resource(this.auth.store.clone(), &this.config);
            match resource.create(&value).await {
                Ok(_) => {
                    title.set(String::new());
                    this.refresh().await;
                }
                Err(e) => this.fail("create", &e),
            }
        });
    }

    fn remove(&self, id: i64) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            let resource = todo_resource(this.auth.store.clone(), &this.config);
            match resource.remove(id).await {
                Ok(_) => this.refresh().await,
                Err(e) => this.fail("remove", &e),
            }
        });
    }

    fn fail(&self, op: &str, err: &ResourceError) {
        if let Some(text) = error_text(err) {
            log::warn!("todo {op} failed: {text}");
            self.error.set(Some(text));
        }
    }
}
