//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! todo list is process-local and lost on restart.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use sampleapp_core::Todo;
use tokio::sync::RwLock;

// =============================================================================
// TODO STORE
// =============================================================================

/// In-memory todo list. Ids start at 1 and are never reused, even after the
/// todo holding them is removed.
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: i64,
}

impl TodoStore {
    #[must_use]
    pub fn new() -> Self {
        Self { todos: Vec::new(), next_id: 1 }
    }

    /// All todos in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn create(&mut self, title: String) -> Todo {
        let todo = Todo { id: self.next_id, title };
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    /// Remove and return the todo with `id`, if present.
    pub fn remove(&mut self, id: i64) -> Option<Todo> {
        let idx = self.todos.iter().position(|todo| todo.id == id)?;
        Some(self.todos.remove(idx))
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state. Clone is required by Axum; the store is
/// Arc-wrapped so every clone sees the same list.
#[derive(Clone, Default)]
pub struct AppState {
    pub todos: Arc<RwLock<TodoStore>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
