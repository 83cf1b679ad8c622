//! Account-scoped snapshots: fee rates and balances

use serde::Serialize;

use crate::traits::{AssetHolding, TradingFee};

/// Maker/taker commission for one trading pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeRate {
    symbol: String,
    maker_fee_rate: f64,
    taker_fee_rate: f64,
    recent_days_sum: Option<f64>,
}

impl FeeRate {
    /// Create a new fee rate
    pub fn new(
        symbol: impl Into<String>,
        maker_fee_rate: f64,
        taker_fee_rate: f64,
        recent_days_sum: Option<f64>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            maker_fee_rate,
            taker_fee_rate,
            recent_days_sum,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Maker fee as a fraction (0.001 = 0.1%)
    pub fn maker_fee_rate(&self) -> f64 {
        self.maker_fee_rate
    }

    /// Taker fee as a fraction (0.001 = 0.1%)
    pub fn taker_fee_rate(&self) -> f64 {
        self.taker_fee_rate
    }

    /// Trailing volume figure, when the exchange reports one
    pub fn recent_days_sum(&self) -> Option<f64> {
        self.recent_days_sum
    }
}

impl TradingFee for FeeRate {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn maker_fee_rate(&self) -> f64 {
        self.maker_fee_rate
    }

    fn taker_fee_rate(&self) -> f64 {
        self.taker_fee_rate
    }

    fn recent_days_sum(&self) -> Option<f64> {
        self.recent_days_sum
    }
}

/// Holding of one asset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Balance {
    asset: String,
    fa_name: String,
    fiat: bool,
    value: f64,
    locked: f64,
}

impl Balance {
    /// Create a new balance
    pub fn new(
        asset: impl Into<String>,
        fa_name: impl Into<String>,
        fiat: bool,
        value: f64,
        locked: f64,
    ) -> Self {
        Self {
            asset: asset.into(),
            fa_name: fa_name.into(),
            fiat,
            value,
            locked,
        }
    }

    pub fn asset(&self) -> &str {
        &self.asset
    }

    /// Localized (Persian) display name
    pub fn fa_name(&self) -> &str {
        &self.fa_name
    }

    pub fn is_fiat(&self) -> bool {
        self.fiat
    }

    /// Total holding, locked portion included
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Portion reserved by open orders
    pub fn locked(&self) -> f64 {
        self.locked
    }

    /// Portion free to trade or withdraw (`value - locked`)
    pub fn available(&self) -> f64 {
        self.value - self.locked
    }
}

impl AssetHolding for Balance {
    fn asset(&self) -> &str {
        &self.asset
    }

    fn fa_name(&self) -> &str {
        &self.fa_name
    }

    fn is_fiat(&self) -> bool {
        self.fiat
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn locked(&self) -> f64 {
        self.locked
    }
}
