//! Shared application state for all routes.

use crate::service::{TodoList, UserRegistry};
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Users are kept in memory only; they do not survive a restart.
    pub users: Arc<UserRegistry>,
    pub todos: Arc<TodoList>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        AppState {
            pool,
            users: Arc::new(UserRegistry::new()),
            todos: Arc::new(TodoList::new()),
        }
    }
}
