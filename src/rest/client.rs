//! Coinspaid REST API client implementation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::auth::{CredentialsProvider, StaticCredentials, sign_body};
use crate::error::{ApiError, CoinspaidError, ValidationError};
use crate::rest::endpoints::{COINSPAID_LIVE_URL, paths};
use crate::rest::traits::CoinspaidApi;
use crate::rest::types::{
    Address, DataEnvelope, TakeAddressInput, WithdrawCryptoInput, WithdrawCryptoPayload,
};

/// Fixed timeout applied to every request unless overridden on the builder.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The Coinspaid REST API client.
///
/// Every operation is a single stateless round trip: the typed input is
/// serialized to JSON, the body bytes are signed with HMAC-SHA512, and the
/// request is sent with the `X-Processing-Key` and `X-Processing-Signature`
/// headers. The client holds no per-call mutable state and is safe for
/// concurrent use across tasks.
///
/// # Example
///
/// ```rust,no_run
/// use coinspaid_api_client::rest::{COINSPAID_SANDBOX_URL, CoinspaidClient, TakeAddressInput};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinspaidClient::new("api_key", "api_secret", COINSPAID_SANDBOX_URL)?;
///
///     let input = TakeAddressInput::new("user-id:2048", "BTC");
///     let address = client.take_address(&input).await?;
///     println!("Deposit address: {}", address.address);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinspaidClient {
    http_client: ClientWithMiddleware,
    base_url: Url,
    credentials: Arc<dyn CredentialsProvider>,
}

impl CoinspaidClient {
    /// Create a client from an API key, secret and base endpoint.
    ///
    /// Fails fast with [`CoinspaidError::MissingCredentials`] when the key or
    /// secret is empty and with [`CoinspaidError::Url`] when the endpoint does
    /// not parse as a URL; no network call is attempted.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        base_endpoint: impl Into<String>,
    ) -> Result<Self, CoinspaidError> {
        Self::builder()
            .credentials(Arc::new(StaticCredentials::new(api_key, api_secret)))
            .base_url(base_endpoint)
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> CoinspaidClientBuilder {
        CoinspaidClientBuilder::new()
    }

    /// Take a deposit address for the given foreign ID and currency.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinspaid_api_client::rest::{COINSPAID_SANDBOX_URL, CoinspaidClient, TakeAddressInput};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinspaidClient::new("api_key", "api_secret", COINSPAID_SANDBOX_URL)?;
    ///     let address = client
    ///         .take_address(&TakeAddressInput::new("user-id:2048", "BTC"))
    ///         .await?;
    ///     println!("{}: {}", address.currency, address.address);
    ///     Ok(())
    /// }
    /// ```
    pub async fn take_address(
        &self,
        input: &TakeAddressInput,
    ) -> Result<Address, CoinspaidError> {
        self.signed_post(paths::TAKE_ADDRESS, input).await
    }

    /// Withdraw crypto to any specified address.
    pub async fn withdraw_crypto(
        &self,
        input: &WithdrawCryptoInput,
    ) -> Result<WithdrawCryptoPayload, CoinspaidError> {
        self.signed_post(paths::WITHDRAW_CRYPTO, input).await
    }

    /// Serialize, sign and POST a request body, then classify the response.
    async fn signed_post<T, P>(&self, path: &str, input: &P) -> Result<T, CoinspaidError>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize,
    {
        let url = self.base_url.join(path)?;
        let body = serde_json::to_vec(input)?;

        // Sign the exact bytes that go on the wire.
        let creds = self.credentials.get_credentials();
        let signature = sign_body(creds, &body);

        tracing::debug!(endpoint = path, "sending signed request");

        let response = self
            .http_client
            .post(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header("X-Processing-Key", &creds.api_key)
            .header("X-Processing-Signature", signature)
            .body(body)
            .send()
            .await?;

        self.parse_response(path, response).await
    }

    /// Classify a response by status code and decode accordingly.
    async fn parse_response<T>(
        &self,
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T, CoinspaidError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            // Successful bodies wrap the payload under a "data" key.
            let envelope: DataEnvelope<T> = serde_json::from_str(&body).map_err(|e| {
                CoinspaidError::InvalidResponse(format!(
                    "Failed to parse response: {e}. Body: {body}"
                ))
            })?;
            return Ok(envelope.data);
        }

        // HTTP 400 carries a structured field->message map. A 400 whose body
        // does not match that shape degrades to the generic branch below.
        if status == StatusCode::BAD_REQUEST {
            if let Ok(envelope) = serde_json::from_str::<ErrorsEnvelope>(&body) {
                return Err(CoinspaidError::Validation(ValidationError {
                    status,
                    endpoint: endpoint.to_string(),
                    errors: envelope.errors,
                }));
            }
        }

        let (message, code) = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => (envelope.error, envelope.code),
            // Empty or unparseable error bodies keep the raw text as the message.
            Err(_) => (body, String::new()),
        };

        Err(CoinspaidError::Api(ApiError {
            status,
            endpoint: endpoint.to_string(),
            message,
            code,
        }))
    }
}

impl std::fmt::Debug for CoinspaidClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinspaidClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

/// Builder for [`CoinspaidClient`].
pub struct CoinspaidClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl CoinspaidClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: COINSPAID_LIVE_URL.to_string(),
            credentials: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL (live, sandbox, or a mock server for testing).
    ///
    /// Operation paths are resolved relative to it; a missing trailing slash
    /// is added so the last path segment is not swallowed during resolution.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider. Required.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Override the fixed request timeout (default 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    ///
    /// Fails when no credentials are configured, the key or secret is empty,
    /// or the base URL does not parse.
    pub fn build(self) -> Result<CoinspaidClient, CoinspaidError> {
        let credentials = self.credentials.ok_or(CoinspaidError::MissingCredentials)?;
        {
            let creds = credentials.get_credentials();
            if creds.api_key.is_empty() || creds.expose_secret().is_empty() {
                return Err(CoinspaidError::MissingCredentials);
            }
        }

        let mut base_url = Url::parse(&self.base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("coinspaid-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("coinspaid-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(CoinspaidClient {
            http_client,
            base_url,
            credentials,
        })
    }
}

impl Default for CoinspaidClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generic error envelope: `{"error": message, "code": code}`.
#[derive(Debug, serde::Deserialize)]
struct ErrorEnvelope {
    error: String,
    #[serde(default)]
    code: String,
}

/// Validation error envelope: `{"errors": {field: message, ...}}`.
#[derive(Debug, serde::Deserialize)]
struct ErrorsEnvelope {
    errors: HashMap<String, String>,
}

// CoinspaidApi trait implementation.

impl CoinspaidApi for CoinspaidClient {
    async fn take_address(&self, input: &TakeAddressInput) -> Result<Address, CoinspaidError> {
        CoinspaidClient::take_address(self, input).await
    }

    async fn withdraw_crypto(
        &self,
        input: &WithdrawCryptoInput,
    ) -> Result<WithdrawCryptoPayload, CoinspaidError> {
        CoinspaidClient::withdraw_crypto(self, input).await
    }
}
