pub mod health;
pub use self::health::health;

pub mod user_register;
pub use self::user_register::register;

pub mod user_login;
pub use self::user_login::login;

pub mod user_rename;
pub use self::user_rename::rename;

// common functions for the handlers
use crate::auth;
use axum::http::StatusCode;
use tracing::error;

/// Map a credential service failure to a response, logging internal
/// failures without echoing their detail to the client.
pub(crate) fn error_response(err: &auth::Error) -> (StatusCode, String) {
    match err {
        auth::Error::Conflict => (StatusCode::CONFLICT, "Username already exists".to_string()),
        auth::Error::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            "Invalid username or password".to_string(),
        ),
        auth::Error::NotFound => (StatusCode::NOT_FOUND, "Account not found".to_string()),
        auth::Error::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid token".to_string()),
        auth::Error::TokenIssuance(_) | auth::Error::StoreUnavailable(_) | auth::Error::Hash(_) => {
            error!("Internal error: {err:?}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token;

    #[test]
    fn conflict_maps_to_409() {
        let (status, message) = error_response(&auth::Error::Conflict);

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(message, "Username already exists");
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let (status, message) = error_response(&auth::Error::Unauthorized);

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Invalid username or password");
    }

    #[test]
    fn not_found_maps_to_404() {
        let (status, _) = error_response(&auth::Error::NotFound);

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_token_maps_to_401() {
        let (status, _) = error_response(&auth::Error::InvalidToken(token::Error::Expired));

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn internal_failures_map_to_500_without_detail() {
        let (status, message) =
            error_response(&auth::Error::StoreUnavailable(sqlx::Error::PoolClosed));

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Internal server error");
    }
}
