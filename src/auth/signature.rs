//! HMAC-SHA512 signature generation for Coinspaid API authentication.
//!
//! Every request body is signed as:
//! ```text
//! hex(HMAC-SHA512(body_bytes, api_secret))
//! ```
//!
//! The signature is sent in the `X-Processing-Signature` header.

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::auth::Credentials;

type HmacSha512 = Hmac<Sha512>;

/// Sign a serialized request body for the Coinspaid API.
///
/// Computes HMAC-SHA512 over the exact bytes of the body, keyed by the API
/// secret, and returns the digest as a lowercase hex string. The caller must
/// transmit the same byte buffer it signed; serializing again after signing
/// invalidates the signature server-side.
///
/// # Example
///
/// ```rust
/// use coinspaid_api_client::auth::{Credentials, sign_body};
///
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_body(&credentials, br#"{"currency":"BTC"}"#);
/// assert_eq!(signature.len(), 128);
/// ```
pub fn sign_body(credentials: &Credentials, body: &[u8]) -> String {
    let mut hmac = HmacSha512::new_from_slice(credentials.expose_secret().as_bytes())
        .expect("HMAC can take key of any size");
    hmac.update(body);
    hex::encode(hmac.finalize().into_bytes())
}
