use crate::token;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("username already exists")]
    Conflict,
    #[error("invalid username or password")]
    Unauthorized,
    #[error("account not found")]
    NotFound,
    #[error("invalid token")]
    InvalidToken(#[source] token::Error),
    #[error("token issuance failed")]
    TokenIssuance(#[source] token::Error),
    #[error("credential store unavailable")]
    StoreUnavailable(#[from] sqlx::Error),
    #[error("password hashing failed")]
    Hash(#[from] bcrypt::BcryptError),
}
