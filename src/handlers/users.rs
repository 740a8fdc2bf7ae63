use crate::error::AppError;
use crate::extractors::Payload;
use crate::models::{User, UserSignIn};
use crate::response::{message_ok, MessageBody};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    post,
    path = "/user/signup",
    tag = "User",
    request_body = User,
    responses(
        (status = 200, description = "User registered", body = MessageBody),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Invalid payload")
    )
)]
pub async fn sign_user_up(
    State(state): State<AppState>,
    Payload(data): Payload<User>,
) -> Result<impl IntoResponse, AppError> {
    state.users.sign_up(data).await?;
    Ok(message_ok("User successfully registered!"))
}

#[utoipa::path(
    post,
    path = "/user/signin",
    tag = "User",
    request_body = UserSignIn,
    responses(
        (status = 200, description = "Credentials accepted", body = MessageBody),
        (status = 403, description = "Wrong password"),
        (status = 404, description = "Unknown user")
    )
)]
pub async fn sign_user_in(
    State(state): State<AppState>,
    Payload(user): Payload<UserSignIn>,
) -> Result<impl IntoResponse, AppError> {
    state.users.sign_in(user).await?;
    Ok(message_ok("User signed in successfully."))
}
