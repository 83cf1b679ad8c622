//! Order book entries and snapshots

use serde::Serialize;

use crate::traits::{DepthBook, PriceLevel};

/// A single ask or bid entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Order {
    price: f64,
    quantity: f64,
    sum: f64,
}

impl Order {
    /// Create a new order entry
    pub fn new(price: f64, quantity: f64, sum: f64) -> Self {
        Self {
            price,
            quantity,
            sum,
        }
    }

    /// Price per unit
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Quantity at this price
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Cumulative sum as reported by the exchange
    pub fn sum(&self) -> f64 {
        self.sum
    }
}

impl PriceLevel for Order {
    fn price(&self) -> f64 {
        self.price
    }

    fn quantity(&self) -> f64 {
        self.quantity
    }

    fn sum(&self) -> f64 {
        self.sum
    }
}

/// Asks and bids for one trading pair at one point in time
///
/// Both sides keep the order the exchange sent; nothing is re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderBook {
    symbol: String,
    asks: Vec<Order>,
    bids: Vec<Order>,
}

impl OrderBook {
    /// Create a new order book snapshot
    pub fn new(symbol: impl Into<String>, asks: Vec<Order>, bids: Vec<Order>) -> Self {
        Self {
            symbol: symbol.into(),
            asks,
            bids,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn asks(&self) -> &[Order] {
        &self.asks
    }

    pub fn bids(&self) -> &[Order] {
        &self.bids
    }

    /// Take ownership of both sides as `(asks, bids)`
    pub fn into_sides(self) -> (Vec<Order>, Vec<Order>) {
        (self.asks, self.bids)
    }
}

impl DepthBook for OrderBook {
    type Level = Order;

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn asks(&self) -> &[Order] {
        &self.asks
    }

    fn bids(&self) -> &[Order] {
        &self.bids
    }
}
