//! Domain types for the Wallex exchange REST client
//!
//! Read-only snapshots of market and account state. Nothing in this crate
//! performs I/O; values are produced by a decoder (see `wallex-rest`) and
//! handed to the caller.
//!
//! # Key Types
//!
//! - [`Order`] - One ask or bid entry (price, quantity, cumulative sum)
//! - [`OrderBook`] - Asks and bids for one trading pair
//! - [`FeeRate`] - Maker/taker commission for one trading pair
//! - [`Balance`] - Holding of one asset, split into locked and available
//! - [`Symbol`] - Trading pair identifier (e.g. "BTCUSDT")
//!
//! The accessor traits ([`PriceLevel`], [`DepthBook`], [`TradingFee`],
//! [`AssetHolding`]) describe the same contracts so another exchange
//! integration can supply its own producers.

pub mod account;
pub mod order;
pub mod symbol;
pub mod traits;

pub use account::*;
pub use order::*;
pub use symbol::*;
pub use traits::*;
