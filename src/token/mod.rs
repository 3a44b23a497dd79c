use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validity window for issued tokens (1 hour)
pub const TOKEN_TTL_SECONDS: i64 = 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid token format")]
    TokenFormat,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("token encoding failed")]
    Encode(#[source] jsonwebtoken::errors::Error),
}

/// Signs and verifies bearer tokens. The signing secret is supplied at
/// construction; there is no revocation list, a token stays valid until
/// its embedded expiry.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_seconds: i64,
}

impl TokenIssuer {
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let secret = secret.expose_secret().as_bytes();

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_seconds: TOKEN_TTL_SECONDS,
        }
    }

    #[must_use]
    pub fn with_ttl_seconds(mut self, seconds: i64) -> Self {
        self.ttl_seconds = seconds;
        self
    }

    /// Issue a signed token bound to `username`, valid from now until the
    /// configured window elapses.
    ///
    /// # Errors
    ///
    /// Returns an error if claim encoding or signing fails.
    pub fn issue(&self, username: &str) -> Result<String, Error> {
        let iat = Utc::now().timestamp();

        let claims = Claims {
            sub: username.to_string(),
            iat,
            exp: iat + self.ttl_seconds,
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(Error::Encode)
    }

    /// Verify a token and return its embedded claims.
    ///
    /// # Errors
    ///
    /// Returns an error if the signature does not match, the current time
    /// exceeds the embedded expiry, or the token is malformed.
    pub fn verify(&self, token: &str) -> Result<Claims, Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        // expiry is exact, no grace period
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => Error::Expired,
                ErrorKind::InvalidSignature => Error::InvalidSignature,
                _ => Error::TokenFormat,
            })
    }
}
