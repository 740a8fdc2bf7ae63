//! In-memory todo list.

use crate::error::AppError;
use crate::models::{Todo, TodoItem};
use tokio::sync::RwLock;

const TODO_NOT_FOUND: &str = "Todo with supplied ID doesn't exist";

#[derive(Default)]
pub struct TodoList {
    todos: RwLock<Vec<Todo>>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a todo. A missing id becomes one past the largest id in the list.
    pub async fn add(&self, mut todo: Todo) -> Result<Todo, AppError> {
        let mut todos = self.todos.write().await;
        match todo.id {
            Some(id) if todos.iter().any(|t| t.id == Some(id)) => {
                return Err(AppError::Conflict(format!("Todo with ID {} already exists", id)));
            }
            Some(_) => {}
            None => {
                let next = todos.iter().filter_map(|t| t.id).max().unwrap_or(0) + 1;
                todo.id = Some(next);
            }
        }
        todos.push(todo.clone());
        Ok(todo)
    }

    pub async fn all(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    pub async fn get(&self, id: i64) -> Result<Todo, AppError> {
        self.todos
            .read()
            .await
            .iter()
            .find(|t| t.id == Some(id))
            .cloned()
            .ok_or_else(|| AppError::NotFound(TODO_NOT_FOUND.into()))
    }

    /// Replace the text of an existing todo.
    pub async fn update(&self, id: i64, data: TodoItem) -> Result<(), AppError> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == Some(id))
            .ok_or_else(|| AppError::NotFound(TODO_NOT_FOUND.into()))?;
        todo.item = data.item;
        Ok(())
    }

    pub async fn remove(&self, id: i64) -> Result<(), AppError> {
        let mut todos = self.todos.write().await;
        let index = todos
            .iter()
            .position(|t| t.id == Some(id))
            .ok_or_else(|| AppError::NotFound(TODO_NOT_FOUND.into()))?;
        todos.remove(index);
        Ok(())
    }

    pub async fn clear(&self) {
        self.todos.write().await.clear();
    }
}
