//! Request extractors.

mod payload;

pub use payload::{JsonOrForm, Payload};
