//! Coinspaid REST API client.
//!
//! Provides signed access to the Coinspaid payment processing endpoints:
//! taking deposit addresses and submitting crypto withdrawals.
//!
//! # Trait-based API
//!
//! The [`CoinspaidApi`] trait abstracts the REST operations, enabling mock
//! implementations for testing and decorator-style wrappers:
//!
//! ```rust,ignore
//! use coinspaid_api_client::rest::{CoinspaidApi, TakeAddressInput};
//!
//! async fn deposit_address<C: CoinspaidApi>(client: &C) -> Result<String, coinspaid_api_client::CoinspaidError> {
//!     let address = client.take_address(&TakeAddressInput::new("user-id:2048", "BTC")).await?;
//!     Ok(address.address)
//! }
//! ```

mod client;
mod endpoints;
mod traits;
mod types;

pub use client::{CoinspaidClient, CoinspaidClientBuilder};
pub use endpoints::*;
pub use traits::CoinspaidApi;
pub use types::{Address, TakeAddressInput, WithdrawCryptoInput, WithdrawCryptoPayload};
