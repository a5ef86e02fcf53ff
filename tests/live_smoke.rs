use std::sync::Arc;

use coinspaid_api_client::auth::EnvCredentials;
use coinspaid_api_client::rest::{COINSPAID_SANDBOX_URL, CoinspaidClient, TakeAddressInput};

fn live_tests_enabled() -> bool {
    std::env::var("COINSPAID_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_sandbox_take_address() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = CoinspaidClient::builder()
        .base_url(COINSPAID_SANDBOX_URL)
        .credentials(Arc::new(credentials))
        .build()?;

    let input = TakeAddressInput::new("live-smoke:1", "BTC");
    let address = client.take_address(&input).await?;
    assert!(!address.address.is_empty());
    assert_eq!(address.foreign_id, "live-smoke:1");

    Ok(())
}
