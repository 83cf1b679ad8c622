//! Wire types for Wallex REST API responses
//!
//! These mirror the JSON shapes the exchange sends. Numeric fields the
//! exchange transmits as strings stay `String` here; conversion to numbers
//! happens in [`crate::decode`] so a bad value can be reported with its
//! field path.

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

// ============================================================================
// API Response Wrapper
// ============================================================================

/// Standard Wallex API response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    /// Whether the exchange accepted the request
    pub success: bool,
    /// Human-readable message (populated on failure)
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// Endpoint-specific payload
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

impl ApiEnvelope {
    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the payload, or the exchange's message if it rejected the request
    ///
    /// `Ok(None)` means the request succeeded but carried no result.
    pub fn into_result(self) -> Result<Option<serde_json::Value>, String> {
        if self.success {
            Ok(self.result)
        } else {
            Err(self.message)
        }
    }
}

// ============================================================================
// Market Data Types
// ============================================================================

/// One ask/bid entry as transmitted
#[derive(Debug, Clone, Deserialize)]
pub struct RawOrder {
    /// Price (numeric string)
    pub price: String,
    /// Quantity (JSON number)
    pub quantity: f64,
    /// Cumulative sum (numeric string)
    pub sum: String,
}

/// Order book payload for one symbol
#[derive(Debug, Clone, Deserialize)]
pub struct RawOrderBook {
    /// Sell side; `null` reads as empty
    #[serde(deserialize_with = "null_as_default")]
    pub ask: Vec<RawOrder>,
    /// Buy side; `null` reads as empty
    #[serde(deserialize_with = "null_as_default")]
    pub bid: Vec<RawOrder>,
}

// ============================================================================
// Account Types
// ============================================================================

/// Fee rate entry for one symbol as transmitted
#[derive(Debug, Clone, Deserialize)]
pub struct RawFeeRate {
    /// Maker fee fraction (numeric string)
    #[serde(rename = "makerFeeRate")]
    pub maker_fee_rate: String,
    /// Taker fee fraction (numeric string)
    #[serde(rename = "takerFeeRate")]
    pub taker_fee_rate: String,
    /// Trailing volume (JSON number, optional)
    #[serde(default)]
    pub recent_days_sum: Option<f64>,
}

/// Balance entry for one asset as transmitted
#[derive(Debug, Clone, Deserialize)]
pub struct RawBalance {
    pub asset: String,
    #[serde(rename = "faName")]
    pub fa_name: String,
    pub fiat: bool,
    /// Total holding (numeric string)
    pub value: String,
    /// Reserved portion (numeric string)
    pub locked: String,
}

/// Balances payload
#[derive(Debug, Clone, Deserialize)]
pub struct RawBalances {
    /// Asset symbol -> balance entry
    pub balances: HashMap<String, RawBalance>,
}

/// Read JSON `null` as the type's default instead of failing
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
