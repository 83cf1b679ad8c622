//! REST API client for the Wallex cryptocurrency exchange
//!
//! This crate fetches read-side market and account state from Wallex and
//! returns it as the typed snapshots defined in `wallex-types`.
//!
//! # Features
//!
//! - **Market Data**: Order book for one pair, order books for all pairs
//! - **Account**: Fee rates and balances (one or all)
//!
//! Every call is a fresh, stateless request: nothing is cached, nothing is
//! retried, and no order is ever placed.
//!
//! # Authentication
//!
//! Account endpoints require an API key, sent in the `X-API-Key` header.
//! Build a client with [`Credentials`] to enable them.
//!
//! # Example
//!
//! ```no_run
//! use wallex_rest::{Credentials, WallexClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WallexClient::with_credentials(Credentials::from_env()?)?;
//!
//!     let book = client.get_order_book("BTCUSDT").await?;
//!     println!("{} asks, {} bids", book.asks().len(), book.bids().len());
//!
//!     let fee = client.get_fee_rate("BTCUSDT").await?;
//!     println!("maker {} / taker {}", fee.maker_fee_rate(), fee.taker_fee_rate());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The client reaches the network only through the [`Transport`] trait.
//! Enable the `test-utils` feature for [`transport::MockTransport`], or
//! pass your own implementation to [`WallexClient::with_transport`].

pub mod auth;
pub mod client;
pub mod decode;
pub mod endpoints;
pub mod error;
pub mod prelude;
pub mod transport;
pub mod types;

// Re-export main types
pub use auth::Credentials;
pub use client::{ClientConfig, WallexClient};
pub use error::{RestError, RestResult};
pub use transport::{HttpResponse, HttpTransport, Transport, TransportError};

// Re-export domain types
pub use wallex_types::{Balance, FeeRate, Order, OrderBook, Symbol};
