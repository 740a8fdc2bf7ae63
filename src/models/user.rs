//! User sign-up and sign-in payloads.

use crate::error::AppError;
use crate::models::Event;
use crate::service::{validate_email, Validate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "email": "fastapi@packt.com",
    "password": "strong!!!",
    "events": []
}))]
pub struct User {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub events: Option<Vec<Event>>,
}

impl Validate for User {
    fn validate(&self) -> Result<(), AppError> {
        validate_email("email", &self.email)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "email": "fastapi@packt.com",
    "password": "strong!!!"
}))]
pub struct UserSignIn {
    pub email: String,
    pub password: String,
}

impl Validate for UserSignIn {
    fn validate(&self) -> Result<(), AppError> {
        validate_email("email", &self.email)
    }
}
