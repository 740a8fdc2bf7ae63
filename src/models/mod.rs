//! Request and response schema models.

mod event;
mod todo;
mod user;

pub use event::{Event, EventUpdate};
pub use todo::{Todo, TodoEnvelope, TodoItem, TodoItems};
pub use user::{User, UserSignIn};
