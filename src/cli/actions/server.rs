use crate::cli::{actions::Action, globals::GlobalArgs};
use crate::identeco::new;
use anyhow::{anyhow, Result};
use url::Url;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            dsn,
            token_secret,
        } => {
            // Reject malformed connection strings before opening the pool
            let dsn = Url::parse(&dsn)?;

            if dsn.scheme() != "postgres" && dsn.scheme() != "postgresql" {
                return Err(anyhow!("unsupported DSN scheme: {}", dsn.scheme()));
            }

            let globals = GlobalArgs::new(token_secret);

            new(port, dsn.to_string(), &globals).await?;
        }
    }

    Ok(())
}
