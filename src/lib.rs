//! # Identeco
//!
//! `identeco` is a minimal user registration and login service. Accounts
//! are stored as username/bcrypt-hash pairs in `PostgreSQL`; a successful
//! login is answered with a stateless, time-bounded bearer token signed
//! with a secret supplied at startup.
//!
//! There is no session state beyond the token itself: any holder of the
//! signing secret can verify a token offline until its expiry.

pub mod auth;
pub mod cli;
pub mod identeco;
pub mod token;
