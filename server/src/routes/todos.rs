//! Todo REST routes.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use sampleapp_core::{NewTodo, Todo};

use crate::state::AppState;

/// `GET /api/todos` — every todo in insertion order.
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.todos.read().await.list())
}

/// `POST /api/todos` — append a todo and return it with its new id.
pub async fn create_todo(State(state): State<AppState>, Json(body): Json<NewTodo>) -> (StatusCode, Json<Todo>) {
    let todo = state.todos.write().await.create(body.title);
    tracing::debug!(id = todo.id, "todo created");
    (StatusCode::CREATED, Json(todo))
}

/// `DELETE /api/todos/:id` — remove a todo and return it.
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Todo>, Response> {
    let removed = state.todos.write().await.remove(id);
    match removed {
        Some(todo) => {
            tracing::debug!(id, "todo deleted");
            Ok(Json(todo))
        }
        None => Err(not_found()),
    }
}

pub(crate) fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({ "detail": "Todo not found" }))).into_response()
}
