use crate::{auth, identeco::handlers::error_response};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserRegister {
    username: String,
    password: String,
}

#[utoipa::path(
    post,
    path= "/users/register",
    request_body = UserRegister,
    responses (
        (status = 201, description = "Registration successful", body = String),
        (status = 400, description = "Missing payload", body = String),
        (status = 409, description = "User with the specified username already exists", body = String),
        (status = 500, description = "Unexpected failure", body = String),
    ),
    tag= "users"
)]
// axum handler for register
#[instrument(skip_all)]
pub async fn register(
    pool: Extension<PgPool>,
    payload: Option<Json<UserRegister>>,
) -> impl IntoResponse {
    let user: UserRegister = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()),
    };

    debug!("registering username: {}", user.username);

    match auth::register(&pool, &user.username, &user.password).await {
        Ok(()) => (StatusCode::CREATED, "User created".to_string()),
        Err(err) => error_response(&err),
    }
}
