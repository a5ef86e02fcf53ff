//! Authentication module for the Coinspaid API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - HMAC-SHA512 request body signing

mod credentials;
mod signature;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use signature::sign_body;
