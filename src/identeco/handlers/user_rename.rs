use crate::{auth, identeco::handlers::error_response};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserRename {
    #[serde(rename = "newUsername")]
    new_username: String,
}

#[utoipa::path(
    put,
    path= "/users/{username}",
    request_body = UserRename,
    params(
        ("username" = String, Path, description = "Current username"),
    ),
    responses (
        (status = 200, description = "Profile updated", body = String),
        (status = 400, description = "Missing payload", body = String),
        (status = 404, description = "No account with the specified username", body = String),
        (status = 409, description = "User with the new username already exists", body = String),
        (status = 500, description = "Unexpected failure", body = String),
    ),
    tag= "users"
)]
// axum handler for profile update
#[instrument(skip_all)]
pub async fn rename(
    pool: Extension<PgPool>,
    Path(username): Path<String>,
    payload: Option<Json<UserRename>>,
) -> impl IntoResponse {
    let update: UserRename = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()),
    };

    debug!("renaming {} to {}", username, update.new_username);

    match auth::rename(&pool, &username, &update.new_username).await {
        Ok(()) => (StatusCode::OK, "User profile updated".to_string()),
        Err(err) => error_response(&err),
    }
}
