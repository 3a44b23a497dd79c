//! Credential lifecycle tests against a live PostgreSQL instance.
//!
//! Set `IDENTECO_TEST_DSN` to a reachable database to run these; without
//! it each test is skipped.

use anyhow::{Context, Result};
use identeco::{auth, token::TokenIssuer};
use secrecy::SecretString;
use sqlx::{postgres::PgPoolOptions, PgPool};
use ulid::Ulid;

const SCHEMA_SQL: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/sql/schema.sql"));

async fn test_pool() -> Result<Option<PgPool>> {
    let Ok(dsn) = std::env::var("IDENTECO_TEST_DSN") else {
        eprintln!("Skipping integration test: IDENTECO_TEST_DSN not set");
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&dsn)
        .await
        .context("failed to connect test pool")?;

    sqlx::query(SCHEMA_SQL)
        .execute(&pool)
        .await
        .context("failed to apply schema")?;

    Ok(Some(pool))
}

// usernames are unique per run so tests can rerun against the same database
fn unique(name: &str) -> String {
    format!("{name}-{}", Ulid::new().to_string().to_lowercase())
}

fn issuer() -> TokenIssuer {
    TokenIssuer::new(&SecretString::from("integration-test-secret".to_string()))
}

#[tokio::test]
async fn register_twice_conflicts() -> Result<()> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };

    let alice = unique("alice");
    auth::register(&pool, &alice, "pw1").await?;

    let err = auth::register(&pool, &alice, "pw2").await.unwrap_err();
    assert!(matches!(err, auth::Error::Conflict));

    Ok(())
}

#[tokio::test]
async fn login_succeeds_only_with_registered_password() -> Result<()> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };
    let issuer = issuer();

    let alice = unique("alice");
    auth::register(&pool, &alice, "pw1").await?;

    let token = auth::authenticate(&pool, &issuer, &alice, "pw1").await?;
    let claims = issuer.verify(&token)?;
    assert_eq!(claims.sub, alice);

    let err = auth::authenticate(&pool, &issuer, &alice, "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, auth::Error::Unauthorized));

    // unknown usernames are indistinguishable from wrong passwords
    let err = auth::authenticate(&pool, &issuer, &unique("nobody"), "pw1")
        .await
        .unwrap_err();
    assert!(matches!(err, auth::Error::Unauthorized));

    Ok(())
}

#[tokio::test]
async fn rename_checks_collisions_and_existence() -> Result<()> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };

    let alice = unique("alice");
    let bob = unique("bob");
    auth::register(&pool, &alice, "pw1").await?;
    auth::register(&pool, &bob, "pw2").await?;

    // renaming onto an existing username is refused
    let err = auth::rename(&pool, &alice, &bob).await.unwrap_err();
    assert!(matches!(err, auth::Error::Conflict));

    // renaming a missing account is refused
    let err = auth::rename(&pool, &unique("ghost"), &unique("carol"))
        .await
        .unwrap_err();
    assert!(matches!(err, auth::Error::NotFound));

    // a free name succeeds and the old name no longer resolves
    let carol = unique("carol");
    auth::rename(&pool, &alice, &carol).await?;
    assert!(auth::store::find_account(&pool, &alice).await?.is_none());
    assert!(auth::store::find_account(&pool, &carol).await?.is_some());

    Ok(())
}

#[tokio::test]
async fn renamed_account_logs_in_under_new_username_only() -> Result<()> {
    let Some(pool) = test_pool().await? else {
        return Ok(());
    };
    let issuer = issuer();

    let dora = unique("dora");
    let dina = unique("dina");
    auth::register(&pool, &dora, "pw1").await?;
    auth::rename(&pool, &dora, &dina).await?;

    let token = auth::authenticate(&pool, &issuer, &dina, "pw1").await?;
    assert_eq!(issuer.verify(&token)?.sub, dina);

    let err = auth::authenticate(&pool, &issuer, &dora, "pw1")
        .await
        .unwrap_err();
    assert!(matches!(err, auth::Error::Unauthorized));

    Ok(())
}
