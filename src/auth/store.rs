use crate::auth::Error;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// One persisted credential record.
#[derive(Debug, sqlx::FromRow)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

pub async fn username_taken(pool: &PgPool, username: &str) -> Result<bool, Error> {
    let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM accounts WHERE username = $1) AS taken")
        .bind(username)
        .fetch_one(pool)
        .await?;

    Ok(row.get("taken"))
}

pub async fn insert_account(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
) -> Result<(), Error> {
    sqlx::query("INSERT INTO accounts (username, password_hash) VALUES ($1, $2)")
        .bind(username)
        .bind(password_hash)
        .execute(pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                Error::Conflict
            } else {
                Error::StoreUnavailable(err)
            }
        })?;

    Ok(())
}

pub async fn find_account(pool: &PgPool, username: &str) -> Result<Option<Account>, Error> {
    let account = sqlx::query_as::<_, Account>(
        "SELECT id, username, password_hash, created_at FROM accounts WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// Move an account to a new username. Returns the number of rows updated;
/// zero means no account held the old username.
pub async fn rename_account(
    pool: &PgPool,
    old_username: &str,
    new_username: &str,
) -> Result<u64, Error> {
    let result = sqlx::query("UPDATE accounts SET username = $2 WHERE username = $1")
        .bind(old_username)
        .bind(new_username)
        .execute(pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                Error::Conflict
            } else {
                Error::StoreUnavailable(err)
            }
        })?;

    Ok(result.rows_affected())
}

// Postgres unique_violation. The UNIQUE constraint on username is the
// authority for races the existence pre-checks cannot see.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}
