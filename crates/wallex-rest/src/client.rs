//! Main REST client implementation

use crate::auth::Credentials;
use crate::endpoints::{AccountEndpoints, MarketEndpoints, Requester};
use crate::error::{RestError, RestResult};
use crate::transport::{HttpTransport, Transport};
use reqwest::Url;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use wallex_types::{Balance, FeeRate, OrderBook};

/// Production API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.wallex.ir";

/// Wallex REST API client
///
/// Each call is one independent request/decode cycle; the client holds no
/// per-call state. Cloning is cheap and clones share the transport, so one
/// client can serve many concurrent tasks.
///
/// # Example
///
/// ```no_run
/// use wallex_rest::{Credentials, WallexClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Order books only
///     let client = WallexClient::new()?;
///     let book = client.get_order_book("BTCUSDT").await?;
///
///     // Fee rates and balances need an API key
///     let auth_client = WallexClient::with_credentials(Credentials::from_env()?)?;
///     let btc = auth_client.get_balance("BTC").await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct WallexClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    credentials: Option<Credentials>,
}

impl WallexClient {
    /// Create a new client without credentials
    ///
    /// Only market endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let transport =
            HttpTransport::with_options(config.timeout, config.user_agent.as_deref())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a new client on top of a caller-supplied transport
    ///
    /// `timeout` and `user_agent` in `config` are ignored here; they only
    /// configure the built-in [`HttpTransport`].
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> RestResult<Self> {
        let base_url = config.validated_base_url()?;

        debug!(%base_url, has_credentials = config.credentials.is_some(), "Created Wallex REST client");

        Ok(Self {
            transport,
            base_url,
            credentials: config.credentials,
        })
    }

    /// Check if the client has credentials for account endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn requester<'a>(&'a self, api_key: Option<&'a str>) -> Requester<'a> {
        Requester::new(self.transport.as_ref(), &self.base_url, api_key)
    }

    // ========================================================================
    // Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        let api_key = self.credentials.as_ref().map(Credentials::api_key);
        MarketEndpoints::new(self.requester(api_key))
    }

    /// Get the order book for a trading pair
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g., "BTCUSDT")
    pub async fn get_order_book(&self, symbol: impl AsRef<str>) -> RestResult<OrderBook> {
        self.market().get_order_book(symbol.as_ref()).await
    }

    /// Get order books for all trading pairs, keyed by symbol
    pub async fn get_all_order_books(&self) -> RestResult<HashMap<String, OrderBook>> {
        self.market().get_all_order_books().await
    }

    // ========================================================================
    // Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(AccountEndpoints::new(self.requester(Some(creds.api_key()))))
    }

    /// Get the fee rate for a trading pair
    ///
    /// Fails with `NotFound` if the exchange reports no fee for `symbol`.
    pub async fn get_fee_rate(&self, symbol: impl AsRef<str>) -> RestResult<FeeRate> {
        self.account()?.get_fee_rate(symbol.as_ref()).await
    }

    /// Get fee rates for all trading pairs, keyed by symbol
    pub async fn get_fee_rates(&self) -> RestResult<HashMap<String, FeeRate>> {
        self.account()?.get_fee_rates().await
    }

    /// Get the balance of one asset
    ///
    /// Fails with `NotFound` if the account has no entry for `asset`.
    pub async fn get_balance(&self, asset: impl AsRef<str>) -> RestResult<Balance> {
        self.account()?.get_balance(asset.as_ref()).await
    }

    /// Get balances for all assets, keyed by asset symbol
    pub async fn get_balances(&self) -> RestResult<HashMap<String, Balance>> {
        self.account()?.get_balances().await
    }
}

impl std::fmt::Debug for WallexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WallexClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL
    pub base_url: String,
    /// Per-request timeout (none: the HTTP stack's default)
    pub timeout: Option<Duration>,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: None,
            credentials: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Check the base URL and return it without a trailing slash
    ///
    /// HTTPS is required; plain HTTP is allowed for loopback hosts only.
    fn validated_base_url(&self) -> RestResult<String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| RestError::InvalidConfig(format!("base URL {:?}: {}", self.base_url, e)))?;

        let loopback = matches!(url.host_str(), Some("localhost" | "127.0.0.1" | "[::1]"));

        match url.scheme() {
            "https" => {}
            "http" if loopback => {}
            scheme => {
                return Err(RestError::InvalidConfig(format!(
                    "base URL must use https, got {}://",
                    scheme
                )))
            }
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(RestError::InvalidConfig(
                "base URL must not carry a query or fragment".to_string(),
            ));
        }

        Ok(self.base_url.trim_end_matches('/').to_string())
    }
}
