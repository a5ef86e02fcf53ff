//! # Coinspaid Client
//!
//! An async Rust client library for the Coinspaid cryptocurrency payment
//! processing REST API.
//!
//! ## Features
//!
//! - Deposit address management and crypto withdrawals
//! - HMAC-SHA512 request body signing
//! - Typed success, API-error and validation-error results
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coinspaid_api_client::rest::{COINSPAID_SANDBOX_URL, CoinspaidClient, TakeAddressInput};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinspaidClient::new("api_key", "api_secret", COINSPAID_SANDBOX_URL)?;
//!     let address = client
//!         .take_address(&TakeAddressInput::new("user-id:2048", "BTC"))
//!         .await?;
//!     println!("Deposit address: {}", address.address);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::CoinspaidError;
pub use rest::CoinspaidClient;

/// Result type alias using CoinspaidError
pub type Result<T> = std::result::Result<T, CoinspaidError>;
