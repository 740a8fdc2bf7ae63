//! Data access and domain services: events in SQLite, users and todos in memory.

mod events;
pub mod password;
mod todos;
mod users;
mod validation;

pub use events::{ClearOutcome, EventService};
pub use todos::TodoList;
pub use users::UserRegistry;
pub use validation::{validate_email, Validate};
