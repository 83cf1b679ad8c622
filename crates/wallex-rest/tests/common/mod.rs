//! Common test utilities and fixtures for integration tests
//!
//! Response bodies follow the shapes returned by api.wallex.ir

use serde_json::{json, Value};
use wallex_rest::{ClientConfig, Credentials, WallexClient};
use wiremock::MockServer;

/// API key used by authenticated fixtures
pub const TEST_API_KEY: &str = "12345|wallexTestKey";

/// Start a mock HTTP server
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, without credentials
pub fn public_client(server: &MockServer) -> WallexClient {
    WallexClient::with_config(ClientConfig::new().with_base_url(server.uri()))
        .expect("mock server URL should be accepted")
}

/// Client pointed at the mock server, with [`TEST_API_KEY`]
pub fn auth_client(server: &MockServer) -> WallexClient {
    let credentials = Credentials::new(TEST_API_KEY).expect("test key is valid");
    WallexClient::with_config(
        ClientConfig::new()
            .with_base_url(server.uri())
            .with_credentials(credentials),
    )
    .expect("mock server URL should be accepted")
}

/// Wrap a payload in a success envelope
pub fn success(result: Value) -> Value {
    json!({
        "success": true,
        "message": "The operation was successful",
        "result": result,
    })
}

/// A rejected envelope
pub fn rejected(message: &str) -> Value {
    json!({
        "success": false,
        "message": message,
        "result": null,
    })
}

/// `/v1/depth?symbol=BTCUSDT` result
pub fn btc_usdt_depth() -> Value {
    json!({
        "ask": [
            { "price": "63000.00", "quantity": 0.5, "sum": "31500.00" },
            { "price": "63010.00", "quantity": 1.25, "sum": "78762.50" }
        ],
        "bid": [
            { "price": "62990.00", "quantity": 0.8, "sum": "50392.00" },
            { "price": "62980.00", "quantity": 2.0, "sum": "125960.00" }
        ]
    })
}

/// `/v2/depth/all` result
pub fn all_depths() -> Value {
    json!({
        "BTCUSDT": btc_usdt_depth(),
        "USDTTMN": {
            "ask": [{ "price": "58500", "quantity": 120.0, "sum": "7020000" }],
            "bid": [{ "price": "58450", "quantity": 300.0, "sum": "17535000" }]
        },
        "SHIBTMN": { "ask": null, "bid": [] }
    })
}

/// `/v1/account/fee` result, including the non-pair keys
pub fn fee_rates() -> Value {
    json!({
        "BTCUSDT": {
            "makerFeeRate": "0.00150",
            "takerFeeRate": "0.00200",
            "recent_days_sum": 1250.5
        },
        "ETHUSDT": {
            "makerFeeRate": "0.00150",
            "takerFeeRate": "0.00200"
        },
        "default": {
            "makerFeeRate": "0.00200",
            "takerFeeRate": "0.00250"
        },
        "metaData": { "levels": [] }
    })
}

/// `/v1/account/balances` result
pub fn balances() -> Value {
    json!({
        "balances": {
            "BTC": {
                "asset": "BTC",
                "faName": "بیت کوین",
                "fiat": false,
                "value": "0.05000000",
                "locked": "0.01000000"
            },
            "TMN": {
                "asset": "TMN",
                "faName": "تومان",
                "fiat": true,
                "value": "1500000",
                "locked": "0"
            }
        }
    })
}
