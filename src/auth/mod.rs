//! Credential service: account registration, authentication, and rename.
//!
//! Storage is a single `accounts` table; passwords are persisted only as
//! salted bcrypt hashes. Successful authentication is answered with a
//! time-bounded token from the [`TokenIssuer`].

pub mod error;
pub mod password;
pub mod store;

pub use self::error::Error;

use crate::token::TokenIssuer;
use sqlx::PgPool;
use tracing::{debug, instrument};

/// Register a new account.
///
/// # Errors
///
/// Returns [`Error::Conflict`] if the username is already taken, or
/// [`Error::StoreUnavailable`] if persistence fails.
#[instrument(skip(pool, password))]
pub async fn register(pool: &PgPool, username: &str, password: &str) -> Result<(), Error> {
    if store::username_taken(pool, username).await? {
        return Err(Error::Conflict);
    }

    let password_hash = password::hash_password(password)?;

    // A concurrent registration can still win between the check and the
    // insert; the UNIQUE constraint reports it as Conflict.
    store::insert_account(pool, username, &password_hash).await?;

    debug!("account created");

    Ok(())
}

/// Authenticate an account and mint a session token.
///
/// Unknown usernames and wrong passwords are indistinguishable to the
/// caller.
///
/// # Errors
///
/// Returns [`Error::Unauthorized`] on bad credentials.
#[instrument(skip(pool, issuer, password))]
pub async fn authenticate(
    pool: &PgPool,
    issuer: &TokenIssuer,
    username: &str,
    password: &str,
) -> Result<String, Error> {
    let Some(account) = store::find_account(pool, username).await? else {
        return Err(Error::Unauthorized);
    };

    if !password::verify_password(password, &account.password_hash)? {
        return Err(Error::Unauthorized);
    }

    debug!("credentials accepted");

    issuer.issue(&account.username).map_err(Error::TokenIssuance)
}

/// Move an account to a new username.
///
/// # Errors
///
/// Returns [`Error::Conflict`] if the new username is already taken and
/// [`Error::NotFound`] if no account holds the old username.
#[instrument(skip(pool))]
pub async fn rename(pool: &PgPool, old_username: &str, new_username: &str) -> Result<(), Error> {
    if store::username_taken(pool, new_username).await? {
        return Err(Error::Conflict);
    }

    match store::rename_account(pool, old_username, new_username).await? {
        0 => Err(Error::NotFound),
        _ => Ok(()),
    }
}
