use crate::service::Validate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A todo entry. `id` may be omitted, e.g. when submitted from an HTML form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"id": 1, "item": "Example schema!"}))]
pub struct Todo {
    #[serde(default)]
    pub id: Option<i64>,
    pub item: String,
}

impl Validate for Todo {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"item": "Example schema 1!"}))]
pub struct TodoItem {
    pub item: String,
}

impl Validate for TodoItem {}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "todos": [
        {"item": "Example schema 1!"},
        {"item": "Example schema 2!"},
        {"item": "Example schema 3!"}
    ]
}))]
pub struct TodoItems {
    pub todos: Vec<TodoItem>,
}

/// Wrapper for a single todo lookup.
#[derive(Clone, Debug, Serialize, ToSchema)]
#[schema(example = json!({"todo": {"id": 1, "item": "Example schema!"}}))]
pub struct TodoEnvelope {
    pub todo: Todo,
}
