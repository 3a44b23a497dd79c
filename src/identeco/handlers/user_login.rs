use crate::{auth, identeco::handlers::error_response, token::TokenIssuer};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserLogin {
    username: String,
    password: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Token {
    token: String,
}

#[utoipa::path(
    post,
    path= "/users/login",
    request_body = UserLogin,
    responses (
        (status = 200, description = "Login successful", body = Token, content_type = "application/json"),
        (status = 400, description = "Missing payload", body = String),
        (status = 401, description = "Unauthorized", body = String),
        (status = 500, description = "Unexpected failure", body = String),
    ),
    tag= "users"
)]
// axum handler for login
#[instrument(skip_all)]
pub async fn login(
    pool: Extension<PgPool>,
    issuer: Extension<TokenIssuer>,
    payload: Option<Json<UserLogin>>,
) -> impl IntoResponse {
    let user: UserLogin = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    match auth::authenticate(&pool, &issuer, &user.username, &user.password).await {
        Ok(token) => {
            debug!("login successful");

            (StatusCode::OK, Json(Token { token })).into_response()
        }
        Err(err) => error_response(&err).into_response(),
    }
}
