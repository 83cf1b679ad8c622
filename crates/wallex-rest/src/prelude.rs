//! Re-exports for convenience
//!
//! Import everything you need with:
//! ```
//! use wallex_rest::prelude::*;
//! ```

// Client
pub use crate::auth::Credentials;
pub use crate::client::{ClientConfig, WallexClient};
pub use crate::error::{RestError, RestResult};

// Domain types and their accessor traits
pub use wallex_types::{
    AssetHolding, Balance, DepthBook, FeeRate, Order, OrderBook, PriceLevel, Symbol,
    TradingFee,
};
