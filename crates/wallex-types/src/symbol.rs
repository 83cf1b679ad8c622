//! Trading pair symbols (BTCUSDT format)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quote assets listed on Wallex, longest first so suffix matching is unambiguous
const QUOTE_ASSETS: [&str; 2] = ["USDT", "TMN"];

/// Trading pair symbol (concatenated BASEQUOTE form, no separator)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// BTC/USDT trading pair
    pub const BTC_USDT: &'static str = "BTCUSDT";
    /// BTC/TMN trading pair
    pub const BTC_TMN: &'static str = "BTCTMN";
    /// ETH/USDT trading pair
    pub const ETH_USDT: &'static str = "ETHUSDT";
    /// USDT/TMN trading pair
    pub const USDT_TMN: &'static str = "USDTTMN";

    /// Create a new symbol without validation
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the symbol as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the quote asset (e.g. "USDT" from "BTCUSDT")
    ///
    /// Returns `None` when the symbol does not end in a known quote asset.
    pub fn quote(&self) -> Option<&str> {
        QUOTE_ASSETS
            .iter()
            .copied()
            .find(|quote| self.0.len() > quote.len() && self.0.ends_with(quote))
    }

    /// Get the base asset (e.g. "BTC" from "BTCUSDT")
    pub fn base(&self) -> Option<&str> {
        self.quote().map(|quote| &self.0[..self.0.len() - quote.len()])
    }
}

impl FromStr for Symbol {
    type Err = SymbolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SymbolParseError::Empty);
        }

        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SymbolParseError::InvalidCharacter(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Error parsing a symbol
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymbolParseError {
    #[error("Symbol is empty")]
    Empty,

    #[error("Symbol must be ASCII letters and digits only: {0}")]
    InvalidCharacter(String),
}
