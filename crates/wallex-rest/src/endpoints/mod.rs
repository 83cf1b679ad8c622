//! API endpoint implementations

pub mod account;
pub mod market;

pub use account::AccountEndpoints;
pub use market::MarketEndpoints;

use reqwest::{Method, Url};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::decode::decode_envelope;
use crate::error::{RestError, RestResult};
use crate::transport::Transport;

/// Shared GET pipeline: send, check status, unwrap the envelope
#[derive(Clone, Copy)]
pub(crate) struct Requester<'a> {
    transport: &'a dyn Transport,
    base_url: &'a str,
    api_key: Option<&'a str>,
}

impl<'a> Requester<'a> {
    pub(crate) fn new(
        transport: &'a dyn Transport,
        base_url: &'a str,
        api_key: Option<&'a str>,
    ) -> Self {
        Self {
            transport,
            base_url,
            api_key,
        }
    }

    /// GET `path` and return the envelope's `result` payload
    ///
    /// Any status other than 200 fails before the body is looked at.
    #[instrument(skip(self), fields(authenticated = self.api_key.is_some()))]
    pub(crate) async fn get(&self, path: &str, query: &[(&str, &str)]) -> RestResult<Value> {
        let url = self.url(path, query)?;

        let response = self
            .transport
            .send(Method::GET, url.as_str(), None, self.api_key)
            .await?;

        if response.status != 200 {
            debug!(status = response.status, "Request failed");
            return Err(RestError::RequestFailed {
                status: response.status,
            });
        }

        match decode_envelope(&response.body)?.into_result() {
            Ok(Some(result)) => Ok(result),
            Ok(None) => Err(RestError::MalformedResponse(
                "envelope: success without result".to_string(),
            )),
            Err(message) => {
                debug!(%message, "Exchange rejected request");
                Err(RestError::ExchangeRejected { message })
            }
        }
    }

    fn url(&self, path: &str, query: &[(&str, &str)]) -> RestResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url =
            Url::parse(&raw).map_err(|e| RestError::InvalidConfig(format!("{}: {}", raw, e)))?;

        // query_pairs_mut() would leave a bare '?' on an empty query
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }
}
