//! Response decoding: raw JSON bodies into domain types
//!
//! Every function here is pure. Schema problems (missing field, wrong JSON
//! type) surface as [`RestError::MalformedResponse`]; numeric strings that do
//! not parse surface as [`RestError::FieldFormat`] with the field's path.
//! No partial values are ever returned.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use wallex_types::{Balance, FeeRate, Order, OrderBook};

use crate::error::{RestError, RestResult};
use crate::types::{ApiEnvelope, RawBalance, RawBalances, RawFeeRate, RawOrder, RawOrderBook};

/// Keys in the fee-rate payload that are not trading pairs
pub const RESERVED_FEE_KEYS: [&str; 2] = ["default", "metaData"];

/// Parse a response body into the common envelope
pub fn decode_envelope(body: &[u8]) -> RestResult<ApiEnvelope> {
    serde_json::from_slice(body)
        .map_err(|e| RestError::MalformedResponse(format!("envelope: {}", e)))
}

/// Decode one ask/bid entry
pub fn decode_order(raw: Value) -> RestResult<Order> {
    from_value::<RawOrder>(raw, "order")?.into_order()
}

/// Decode a single-symbol order book, keeping ask/bid order as received
pub fn decode_order_book(raw: Value, symbol: &str) -> RestResult<OrderBook> {
    from_value::<RawOrderBook>(raw, symbol)?.into_order_book(symbol)
}

/// Decode an all-symbols order book payload (symbol -> book)
pub fn decode_order_book_collection(raw: Value) -> RestResult<HashMap<String, OrderBook>> {
    let raw: HashMap<String, RawOrderBook> = from_value(raw, "order books")?;

    raw.into_iter()
        .map(|(symbol, book)| {
            let book = book.into_order_book(&symbol)?;
            Ok((symbol, book))
        })
        .collect()
}

/// Decode the fee rate entry for one symbol
pub fn decode_fee_rate(raw: Value, symbol: &str) -> RestResult<FeeRate> {
    from_value::<RawFeeRate>(raw, symbol)?.into_fee_rate(symbol)
}

/// Decode the fee rate payload (symbol -> fee rate)
///
/// The payload also carries `default` and `metaData` entries with other
/// shapes; those are skipped before decoding.
pub fn decode_fee_rate_collection(raw: Value) -> RestResult<HashMap<String, FeeRate>> {
    let raw: HashMap<String, Value> = from_value(raw, "fee rates")?;

    raw.into_iter()
        .filter(|(symbol, _)| !RESERVED_FEE_KEYS.contains(&symbol.as_str()))
        .map(|(symbol, value)| {
            let fee = decode_fee_rate(value, &symbol)?;
            Ok((symbol, fee))
        })
        .collect()
}

/// Decode one balance entry
pub fn decode_balance(raw: Value) -> RestResult<Balance> {
    from_value::<RawBalance>(raw, "balance")?.into_balance()
}

/// Decode the balances payload (`{"balances": {asset: balance}}`)
pub fn decode_balance_collection(raw: Value) -> RestResult<HashMap<String, Balance>> {
    let raw: RawBalances = from_value(raw, "balances")?;

    raw.balances
        .into_iter()
        .map(|(asset, balance)| {
            // Entry must agree with its map key
            if balance.asset != asset {
                return Err(RestError::FieldFormat {
                    field: "asset".to_string(),
                    value: balance.asset,
                }
                .within(&asset));
            }

            let balance = balance.into_balance().map_err(|e| e.within(&asset))?;
            Ok((asset, balance))
        })
        .collect()
}

/// Strictly parse a numeric string
///
/// Accepts what `f64::from_str` accepts, minus non-finite values and
/// negatives; no whitespace trimming, no empty-string-as-zero.
pub fn parse_numeric(field: &str, raw: &str) -> RestResult<f64> {
    let invalid = || RestError::FieldFormat {
        field: field.to_string(),
        value: raw.to_string(),
    };

    let value: f64 = raw.parse().map_err(|_| invalid())?;

    if !value.is_finite() || (value.is_sign_negative() && value != 0.0) {
        return Err(invalid());
    }

    Ok(value)
}

/// Check a field sent as a native JSON number: finite and non-negative
fn check_native(field: &str, value: f64) -> RestResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(RestError::FieldFormat {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    Ok(value)
}

fn from_value<T: DeserializeOwned>(raw: Value, context: &str) -> RestResult<T> {
    serde_json::from_value(raw)
        .map_err(|e| RestError::MalformedResponse(format!("{}: {}", context, e)))
}

impl RawOrder {
    fn into_order(self) -> RestResult<Order> {
        Ok(Order::new(
            parse_numeric("price", &self.price)?,
            check_native("quantity", self.quantity)?,
            parse_numeric("sum", &self.sum)?,
        ))
    }
}

impl RawOrderBook {
    fn into_order_book(self, symbol: &str) -> RestResult<OrderBook> {
        let asks = convert_side(self.ask, "ask").map_err(|e| e.within(symbol))?;
        let bids = convert_side(self.bid, "bid").map_err(|e| e.within(symbol))?;
        Ok(OrderBook::new(symbol, asks, bids))
    }
}

fn convert_side(side: Vec<RawOrder>, name: &str) -> RestResult<Vec<Order>> {
    side.into_iter()
        .enumerate()
        .map(|(i, order)| {
            order
                .into_order()
                .map_err(|e| e.within(&format!("{}[{}]", name, i)))
        })
        .collect()
}

impl RawFeeRate {
    fn into_fee_rate(self, symbol: &str) -> RestResult<FeeRate> {
        let maker = parse_numeric("makerFeeRate", &self.maker_fee_rate);
        let taker = parse_numeric("takerFeeRate", &self.taker_fee_rate);
        let recent = self
            .recent_days_sum
            .map(|sum| check_native("recent_days_sum", sum))
            .transpose();

        Ok(FeeRate::new(
            symbol,
            maker.map_err(|e| e.within(symbol))?,
            taker.map_err(|e| e.within(symbol))?,
            recent.map_err(|e| e.within(symbol))?,
        ))
    }
}

impl RawBalance {
    fn into_balance(self) -> RestResult<Balance> {
        let value = parse_numeric("value", &self.value)?;
        let locked = parse_numeric("locked", &self.locked)?;

        if locked > value {
            return Err(RestError::FieldFormat {
                field: "locked".to_string(),
                value: self.locked,
            });
        }

        Ok(Balance::new(self.asset, self.fa_name, self.fiat, value, locked))
    }
}
