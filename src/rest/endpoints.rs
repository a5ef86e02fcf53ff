//! Coinspaid REST API endpoint constants.

/// Base URL for the live Coinspaid API.
pub const COINSPAID_LIVE_URL: &str = "https://app.coinspaid.com/api/v2/";

/// Base URL for the sandbox (testing) Coinspaid API.
pub const COINSPAID_SANDBOX_URL: &str = "https://app.sandbox.cryptoprocessing.com/api/v2/";

/// Operation paths, resolved relative to the base URL.
pub mod paths {
    /// Take a deposit address.
    pub const TAKE_ADDRESS: &str = "addresses/take";
    /// Withdraw crypto to an external address.
    pub const WITHDRAW_CRYPTO: &str = "withdrawal/crypto";
}
