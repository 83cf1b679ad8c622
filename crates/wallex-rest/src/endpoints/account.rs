//! Private account endpoints
//!
//! These endpoints require an API key.

use std::collections::HashMap;
use tracing::{debug, instrument};
use wallex_types::{Balance, FeeRate};

use super::Requester;
use crate::decode::{decode_balance_collection, decode_fee_rate_collection};
use crate::error::{RestError, RestResult};

const FEE_PATH: &str = "/v1/account/fee";
const BALANCES_PATH: &str = "/v1/account/balances";

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    requester: Requester<'a>,
}

impl<'a> AccountEndpoints<'a> {
    pub(crate) fn new(requester: Requester<'a>) -> Self {
        Self { requester }
    }

    /// Get fee rates for every trading pair, keyed by symbol
    #[instrument(skip(self))]
    pub async fn get_fee_rates(&self) -> RestResult<HashMap<String, FeeRate>> {
        let result = self.requester.get(FEE_PATH, &[]).await?;
        let fees = decode_fee_rate_collection(result)?;

        debug!(count = fees.len(), "Fetched fee rates");
        Ok(fees)
    }

    /// Get the fee rate for one trading pair
    ///
    /// The exchange has no single-symbol fee endpoint, so this fetches the
    /// full collection and picks one entry.
    #[instrument(skip(self))]
    pub async fn get_fee_rate(&self, symbol: &str) -> RestResult<FeeRate> {
        self.get_fee_rates()
            .await?
            .remove(symbol)
            .ok_or_else(|| RestError::NotFound(symbol.to_string()))
    }

    /// Get balances for every asset, keyed by asset symbol
    #[instrument(skip(self))]
    pub async fn get_balances(&self) -> RestResult<HashMap<String, Balance>> {
        let result = self.requester.get(BALANCES_PATH, &[]).await?;
        let balances = decode_balance_collection(result)?;

        debug!(count = balances.len(), "Fetched balances");
        Ok(balances)
    }

    /// Get the balance of one asset
    ///
    /// Fetches the full collection and picks one entry.
    #[instrument(skip(self))]
    pub async fn get_balance(&self, asset: &str) -> RestResult<Balance> {
        self.get_balances()
            .await?
            .remove(asset)
            .ok_or_else(|| RestError::NotFound(asset.to_string()))
    }
}
