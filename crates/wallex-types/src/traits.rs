//! Accessor contracts shared by every producer of market/account snapshots
//!
//! The concrete types in this crate implement these traits. Code that only
//! reads prices, fees, or holdings can be written against the traits and
//! work unchanged with another exchange's types.

/// One price level (ask or bid)
pub trait PriceLevel {
    /// Price per unit
    fn price(&self) -> f64;
    /// Quantity at this price
    fn quantity(&self) -> f64;
    /// Cumulative sum reported by the exchange for this level
    fn sum(&self) -> f64;
}

/// Order book snapshot for one trading pair
pub trait DepthBook {
    /// Level type held by this book
    type Level: PriceLevel;

    /// Trading pair identifier
    fn symbol(&self) -> &str;

    /// Sell side, in the order the exchange sent it (ascending price)
    fn asks(&self) -> &[Self::Level];

    /// Buy side, in the order the exchange sent it (descending price)
    fn bids(&self) -> &[Self::Level];

    /// First ask level
    fn best_ask(&self) -> Option<&Self::Level> {
        self.asks().first()
    }

    /// First bid level
    fn best_bid(&self) -> Option<&Self::Level> {
        self.bids().first()
    }

    /// Best ask price minus best bid price
    fn spread(&self) -> Option<f64> {
        Some(self.best_ask()?.price() - self.best_bid()?.price())
    }

    /// Average of best ask and best bid prices
    fn mid_price(&self) -> Option<f64> {
        Some((self.best_ask()?.price() + self.best_bid()?.price()) / 2.0)
    }

    /// True when both sides are empty (quiet market)
    fn is_empty(&self) -> bool {
        self.asks().is_empty() && self.bids().is_empty()
    }
}

/// Commission schedule for one trading pair
pub trait TradingFee {
    fn symbol(&self) -> &str;
    /// Maker fee as a fraction (0.001 = 0.1%)
    fn maker_fee_rate(&self) -> f64;
    /// Taker fee as a fraction
    fn taker_fee_rate(&self) -> f64;
    /// Trailing volume used for tier calculation, if reported
    fn recent_days_sum(&self) -> Option<f64>;
}

/// Holding of one asset
pub trait AssetHolding {
    fn asset(&self) -> &str;
    /// Localized display name
    fn fa_name(&self) -> &str;
    fn is_fiat(&self) -> bool;
    /// Total holding
    fn value(&self) -> f64;
    /// Portion reserved by open orders
    fn locked(&self) -> f64;

    /// Portion free to trade or withdraw
    fn available(&self) -> f64 {
        self.value() - self.locked()
    }
}
