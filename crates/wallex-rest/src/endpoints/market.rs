//! Market data endpoints
//!
//! Depth endpoints are public; the API key is still sent when the client
//! has one.

use std::collections::HashMap;
use tracing::{debug, instrument};
use wallex_types::OrderBook;

use super::Requester;
use crate::decode::{decode_order_book, decode_order_book_collection};
use crate::error::RestResult;

const DEPTH_PATH: &str = "/v1/depth";
const ALL_DEPTH_PATH: &str = "/v2/depth/all";

/// Market data endpoints
pub struct MarketEndpoints<'a> {
    requester: Requester<'a>,
}

impl<'a> MarketEndpoints<'a> {
    pub(crate) fn new(requester: Requester<'a>) -> Self {
        Self { requester }
    }

    /// Get the order book for one trading pair
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g., "BTCUSDT")
    #[instrument(skip(self))]
    pub async fn get_order_book(&self, symbol: &str) -> RestResult<OrderBook> {
        let result = self.requester.get(DEPTH_PATH, &[("symbol", symbol)]).await?;
        let book = decode_order_book(result, symbol)?;

        debug!(asks = book.asks().len(), bids = book.bids().len(), "Fetched order book");
        Ok(book)
    }

    /// Get order books for every trading pair, keyed by symbol
    #[instrument(skip(self))]
    pub async fn get_all_order_books(&self) -> RestResult<HashMap<String, OrderBook>> {
        let result = self.requester.get(ALL_DEPTH_PATH, &[]).await?;
        let books = decode_order_book_collection(result)?;

        debug!(count = books.len(), "Fetched all order books");
        Ok(books)
    }
}
