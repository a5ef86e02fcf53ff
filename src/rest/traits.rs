//! Trait definition for the Coinspaid REST API client.
//!
//! This module provides the `CoinspaidApi` trait which abstracts the REST
//! API operations. This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., a caller-side retry wrapper)
//! - Alternative implementations

use std::future::Future;

use crate::error::CoinspaidError;
use crate::rest::types::{Address, TakeAddressInput, WithdrawCryptoInput, WithdrawCryptoPayload};

/// Trait defining the Coinspaid REST API operations.
///
/// All methods are async and return `Result<T, CoinspaidError>`.
pub trait CoinspaidApi: Send + Sync {
    /// Take a deposit address for the given foreign ID and currency.
    fn take_address(
        &self,
        input: &TakeAddressInput,
    ) -> impl Future<Output = Result<Address, CoinspaidError>> + Send;

    /// Withdraw crypto to an external address.
    fn withdraw_crypto(
        &self,
        input: &WithdrawCryptoInput,
    ) -> impl Future<Output = Result<WithdrawCryptoPayload, CoinspaidError>> + Send;
}
