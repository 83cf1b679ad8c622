//! API credentials for Wallex account endpoints
//!
//! Wallex authenticates with a static API key sent in the `X-API-Key`
//! header; there is no request signing. The key is held in a
//! [`SecretString`], so it is zeroized on drop and never shows up in
//! `Debug` output.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{RestError, RestResult};

/// Environment variable read by [`Credentials::from_env`]
pub const API_KEY_ENV: &str = "WALLEX_API_KEY";

/// API credentials for authenticated requests
pub struct Credentials {
    api_key: SecretString,
}

impl Credentials {
    /// Create credentials from an API key
    ///
    /// Fails with `InvalidCredentials` if the key is empty or blank.
    pub fn new(api_key: impl Into<String>) -> RestResult<Self> {
        let api_key = api_key.into();

        if api_key.trim().is_empty() {
            return Err(RestError::InvalidCredentials(
                "API key must not be empty".to_string(),
            ));
        }

        Ok(Self {
            api_key: SecretString::from(api_key),
        })
    }

    /// Create credentials from the `WALLEX_API_KEY` environment variable
    pub fn from_env() -> RestResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| RestError::EnvVarNotSet(API_KEY_ENV.to_string()))?;

        Self::new(api_key)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: SecretString::from(self.api_key.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = self.api_key.expose_secret();
        let shown: String = key.chars().take(4).collect();

        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", shown))
            .finish()
    }
}
