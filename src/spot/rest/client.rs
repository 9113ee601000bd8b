//! Binance Spot REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::{CredentialsProvider, SystemClock, TimestampProvider, sign_query};
use crate::error::{ApiError, BinanceError};
use crate::spot::rest::endpoints::{
    API_KEY_HEADER, BINANCE_BASE_URL, DEFAULT_RECV_WINDOW, Endpoint,
};
use crate::spot::rest::marshal::{QueryString, SignedRequest, signed_query};

/// Default TCP connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default time allowed for a request to complete once connected.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// The Binance Spot REST API client.
///
/// Every method blocks the calling thread for exactly one HTTP round trip
/// and returns either the decoded response or a [`BinanceError`]. Nothing is
/// retried; callers own their retry policy.
///
/// # Example
///
/// ```rust,no_run
/// use binance_api_client::spot::rest::SpotRestClient;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = SpotRestClient::new()?;
///
///     client.ping()?;
///     let prices = client.get_all_prices()?;
///     println!("{} symbols", prices.len());
///
///     Ok(())
/// }
/// ```
///
/// For signed endpoints, provide credentials:
///
/// ```rust,no_run
/// use binance_api_client::spot::rest::SpotRestClient;
/// use binance_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = SpotRestClient::builder()
///         .credentials(credentials)
///         .build()?;
///
///     let account = client.get_account()?;
///     println!("Balances: {:?}", account.balances);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SpotRestClient {
    http_client: Client,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Arc<dyn TimestampProvider>,
    recv_window: u64,
}

impl SpotRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`SpotRestClient::builder()`] to configure credentials.
    pub fn new() -> Result<Self, BinanceError> {
        Self::builder().build()
    }

    /// Create a client for signed endpoints from an API key and secret.
    ///
    /// An empty key or secret is rejected here rather than on first use.
    pub fn with_credentials(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, BinanceError> {
        let credentials = crate::auth::Credentials::try_new(api_key, api_secret)?;
        Self::builder().credentials(Arc::new(credentials)).build()
    }

    /// Create a new client builder.
    pub fn builder() -> SpotRestClientBuilder {
        SpotRestClientBuilder::new()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The receive window applied to signed requests that leave it unset.
    pub fn default_recv_window(&self) -> u64 {
        self.recv_window
    }

    /// Make a public GET request without parameters.
    pub(crate) fn public_get<T>(&self, endpoint: Endpoint) -> Result<T, BinanceError>
    where
        T: DeserializeOwned,
    {
        self.execute(endpoint, &QueryString::new(), None)
    }

    /// Make a public request with parameters.
    pub(crate) fn public_get_with_params<T, Q>(
        &self,
        endpoint: Endpoint,
        params: &Q,
    ) -> Result<T, BinanceError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let query = QueryString::from_params(params)?;
        self.execute(endpoint, &query, None)
    }

    /// Make a request that carries the API key header but no signature.
    pub(crate) fn api_key_request<T>(
        &self,
        endpoint: Endpoint,
        query: &QueryString,
    ) -> Result<T, BinanceError>
    where
        T: DeserializeOwned,
    {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(BinanceError::MissingCredentials)?;
        let creds = credentials.get_credentials();
        self.execute(endpoint, query, Some(&creds.api_key))
    }

    /// Make a signed request.
    pub(crate) fn signed_request<T, R>(
        &self,
        endpoint: Endpoint,
        request: &R,
    ) -> Result<T, BinanceError>
    where
        T: DeserializeOwned,
        R: SignedRequest + ?Sized,
    {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(BinanceError::MissingCredentials)?;
        let creds = credentials.get_credentials();

        let mut query = self.signed_params(request)?;

        // Sign the finalized parameters, then append the signature last.
        let signature = sign_query(creds, query.as_str())?;
        query.push("signature", signature);

        self.execute(endpoint, &query, Some(&creds.api_key))
    }

    /// Marshal a signed request with the client's default window and clock.
    pub(crate) fn signed_params<R>(&self, request: &R) -> Result<QueryString, BinanceError>
    where
        R: SignedRequest + ?Sized,
    {
        signed_query(request, self.recv_window, || {
            self.timestamp_provider.timestamp_ms()
        })
    }

    /// Send one request and decode the answer.
    fn execute<T>(
        &self,
        endpoint: Endpoint,
        query: &QueryString,
        api_key: Option<&str>,
    ) -> Result<T, BinanceError>
    where
        T: DeserializeOwned,
    {
        let url = if query.is_empty() {
            format!("{}{}", self.base_url, endpoint.path())
        } else {
            format!("{}{}?{}", self.base_url, endpoint.path(), query)
        };

        debug!(
            method = %endpoint.method(),
            path = endpoint.path(),
            security = ?endpoint.security(),
            "sending request"
        );

        let mut request = self.http_client.request(endpoint.method(), url);
        if let Some(key) = api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().map_err(|e| {
            warn!(endpoint = %endpoint, error = %e, "request failed");
            BinanceError::from(e)
        })?;
        self.parse_response(endpoint, response)
    }

    /// Parse a response from the Binance API.
    fn parse_response<T>(&self, endpoint: Endpoint, response: Response) -> Result<T, BinanceError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            // Binance reports rejections as {"code": <negative int>, "msg": "..."}.
            return Err(match serde_json::from_str::<ErrorBody>(&body) {
                Ok(error) => {
                    warn!(
                        endpoint = %endpoint,
                        status = status.as_u16(),
                        code = error.code,
                        msg = %error.msg,
                        "request rejected"
                    );
                    BinanceError::Api(ApiError::new(error.code, error.msg, status.as_u16()))
                }
                Err(_) => {
                    warn!(endpoint = %endpoint, status = status.as_u16(), "unexpected status");
                    BinanceError::UnexpectedStatus {
                        status: status.as_u16(),
                        body,
                    }
                }
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            BinanceError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        })
    }
}

impl std::fmt::Debug for SpotRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("recv_window", &self.recv_window)
            .finish()
    }
}

/// Builder for [`SpotRestClient`].
pub struct SpotRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    recv_window: u64,
    user_agent: Option<String>,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl SpotRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BINANCE_BASE_URL.to_string(),
            credentials: None,
            timestamp_provider: None,
            recv_window: DEFAULT_RECV_WINDOW,
            user_agent: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    /// Set the base URL (useful for the testnet or a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for signed and API-key requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the source of default request timestamps.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Set the default receive window in milliseconds.
    pub fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = recv_window;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the TCP connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the total time a request may take, connecting included.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// Fails on a malformed base URL, on credentials with an empty key or
    /// secret, and if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<SpotRestClient, BinanceError> {
        let parsed = url::Url::parse(&self.base_url)?;
        if parsed.cannot_be_a_base() {
            return Err(BinanceError::Config(format!(
                "base URL cannot be a base: {}",
                self.base_url
            )));
        }

        if let Some(credentials) = &self.credentials {
            credentials.get_credentials().validate()?;
        }

        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("binance-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .map_err(|_| BinanceError::Config(format!("invalid user agent: {user_agent}")))?;
        headers.insert(USER_AGENT, header_value);

        let http_client = Client::builder()
            .default_headers(headers)
            .connect_timeout(self.connect_timeout)
            .timeout(self.read_timeout)
            .build()
            .map_err(|e| BinanceError::Config(format!("failed to build HTTP client: {e}")))?;

        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemClock::new()));

        Ok(SpotRestClient {
            http_client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            credentials: self.credentials,
            timestamp_provider,
            recv_window: self.recv_window,
        })
    }
}

impl Default for SpotRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Error body returned with non-2xx responses.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    code: i64,
    msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Credentials, FixedTimestamp, StaticCredentials};
    use crate::spot::rest::private::{AccountRequest, NewOrder};

    #[test]
    fn test_builder_rejects_bad_base_url() {
        let result = SpotRestClient::builder().base_url("not a url").build();
        assert!(matches!(result, Err(BinanceError::Url(_))));
    }

    #[test]
    fn test_builder_rejects_empty_secret() {
        let result = SpotRestClient::builder()
            .credentials(Arc::new(StaticCredentials::new("key", "")))
            .build();
        assert!(matches!(result, Err(BinanceError::Config(_))));
        assert!(SpotRestClient::with_credentials("", "secret").is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = SpotRestClient::builder()
            .base_url("https://testnet.binance.vision/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://testnet.binance.vision");
        assert_eq!(client.default_recv_window(), DEFAULT_RECV_WINDOW);
    }

    #[test]
    fn test_signed_params_use_configured_defaults() {
        let client = SpotRestClient::builder()
            .credentials(Arc::new(Credentials::new("key", "secret")))
            .timestamp_provider(Arc::new(FixedTimestamp(1_700_000_000_000)))
            .recv_window(10_000)
            .build()
            .unwrap();

        let query = client.signed_params(&AccountRequest::default()).unwrap();
        assert_eq!(query.as_str(), "recvWindow=10000&timestamp=1700000000000");

        let order = NewOrder::market_buy("BTCUSDT", "1".parse().unwrap()).timestamp(5);
        let query = client.signed_params(&order).unwrap();
        assert_eq!(query.get("timestamp").as_deref(), Some("5"));
        assert_eq!(query.get("recvWindow").as_deref(), Some("10000"));
    }

    #[test]
    fn test_signed_request_without_credentials() {
        let client = SpotRestClient::new().unwrap();
        let result: Result<serde_json::Value, _> =
            client.signed_request(Endpoint::Account, &AccountRequest::default());
        assert!(matches!(result, Err(BinanceError::MissingCredentials)));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = SpotRestClient::with_credentials("my_key", "my_secret").unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("has_credentials: true"));
        assert!(!debug.contains("my_secret"));
    }
}
