//! HTTP integration tests
//!
//! Runs the real `HttpTransport` against a local wiremock server.

mod common;

use common::*;
use serde_json::json;
use std::net::TcpListener;
use wallex_rest::prelude::*;
use wallex_rest::TransportError;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// =============================================================================
// Market Data
// =============================================================================

#[tokio::test]
async fn test_get_order_book() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/depth"))
        .and(query_param("symbol", "BTCUSDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(btc_usdt_depth())))
        .expect(1)
        .mount(&server)
        .await;

    let book = public_client(&server)
        .get_order_book("BTCUSDT")
        .await
        .unwrap();

    assert_eq!(book.symbol(), "BTCUSDT");
    assert_eq!(book.asks().len(), 2);
    assert_eq!(book.bids().len(), 2);
    assert_eq!(book.asks()[0].price(), 63000.0);
    assert_eq!(book.asks()[1].quantity(), 1.25);
    assert_eq!(book.bids()[1].sum(), 125960.0);
    assert_eq!(book.best_ask().map(|o| o.price()), Some(63000.0));
    assert_eq!(book.spread(), Some(10.0));
}

#[tokio::test]
async fn test_public_request_sends_no_api_key() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/depth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(btc_usdt_depth())))
        .mount(&server)
        .await;

    public_client(&server)
        .get_order_book("BTCUSDT")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("X-API-Key").is_none());
}

#[tokio::test]
async fn test_market_request_forwards_configured_key() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/depth"))
        .and(header("X-API-Key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(btc_usdt_depth())))
        .expect(1)
        .mount(&server)
        .await;

    let book = auth_client(&server).get_order_book("BTCUSDT").await.unwrap();
    assert!(!book.is_empty());
}

#[tokio::test]
async fn test_get_all_order_books() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/depth/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(all_depths())))
        .mount(&server)
        .await;

    let books = public_client(&server).get_all_order_books().await.unwrap();

    assert_eq!(books.len(), 3);
    assert_eq!(books["USDTTMN"].symbol(), "USDTTMN");
    assert_eq!(books["USDTTMN"].bids()[0].price(), 58450.0);

    let shib = &books["SHIBTMN"];
    assert!(shib.asks().is_empty());
    assert!(shib.bids().is_empty());
    assert!(shib.is_empty());
}

#[tokio::test]
async fn test_bad_numeric_field_reports_path() {
    let server = setup_mock_server().await;
    let body = success(json!({
        "ask": [],
        "bid": [{ "price": "62990", "quantity": 1.0, "sum": "n/a" }]
    }));
    Mock::given(method("GET"))
        .and(path("/v1/depth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let err = public_client(&server)
        .get_order_book("BTCUSDT")
        .await
        .unwrap_err();

    match err {
        RestError::FieldFormat { field, value } => {
            assert!(field.ends_with("bid[0].sum"), "unexpected path: {}", field);
            assert_eq!(value, "n/a");
        }
        other => panic!("Expected FieldFormat, got {:?}", other),
    }
}

// =============================================================================
// Account
// =============================================================================

#[tokio::test]
async fn test_get_fee_rates_skips_reserved_keys() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/fee"))
        .and(header("X-API-Key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(fee_rates())))
        .expect(1)
        .mount(&server)
        .await;

    let fees = auth_client(&server).get_fee_rates().await.unwrap();

    assert_eq!(fees.len(), 2);
    assert!(!fees.contains_key("default"));
    assert!(!fees.contains_key("metaData"));

    let btc = &fees["BTCUSDT"];
    assert_eq!(btc.symbol(), "BTCUSDT");
    assert_eq!(btc.maker_fee_rate(), 0.0015);
    assert_eq!(btc.taker_fee_rate(), 0.002);
    assert_eq!(btc.recent_days_sum(), Some(1250.5));
    assert_eq!(fees["ETHUSDT"].recent_days_sum(), None);
}

#[tokio::test]
async fn test_get_fee_rate_not_found() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/fee"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(fee_rates())))
        .mount(&server)
        .await;

    let client = auth_client(&server);

    let eth = client.get_fee_rate("ETHUSDT").await.unwrap();
    assert_eq!(eth.taker_fee_rate(), 0.002);

    let err = client.get_fee_rate("DOGEUSDT").await.unwrap_err();
    assert!(err.is_not_found());

    // Reserved keys are not pairs
    let err = client.get_fee_rate("default").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_balances() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/balances"))
        .and(header("X-API-Key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(balances())))
        .mount(&server)
        .await;

    let balances = auth_client(&server).get_balances().await.unwrap();

    assert_eq!(balances.len(), 2);
    let btc = &balances["BTC"];
    assert_eq!(btc.asset(), "BTC");
    assert_eq!(btc.fa_name(), "بیت کوین");
    assert!(!btc.is_fiat());
    assert_eq!(btc.value(), 0.05);
    assert_eq!(btc.locked(), 0.01);

    assert!(balances["TMN"].is_fiat());
    assert_eq!(balances["TMN"].value(), 1_500_000.0);
}

#[tokio::test]
async fn test_get_balance_single_and_missing() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/balances"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(balances())))
        .mount(&server)
        .await;

    let client = auth_client(&server);

    let tmn = client.get_balance("TMN").await.unwrap();
    assert_eq!(tmn.locked(), 0.0);

    let err = client.get_balance("ETH").await.unwrap_err();
    assert!(matches!(err, RestError::NotFound(_)));
}

#[tokio::test]
async fn test_account_requires_credentials() {
    let server = setup_mock_server().await;

    let err = public_client(&server).get_balances().await.unwrap_err();
    assert!(matches!(err, RestError::AuthRequired));

    // Nothing reached the wire
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

// =============================================================================
// Failure Paths
// =============================================================================

#[tokio::test]
async fn test_server_error_status() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/depth"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = public_client(&server)
        .get_order_book("BTCUSDT")
        .await
        .unwrap_err();

    assert!(matches!(err, RestError::RequestFailed { status: 503 }));
    assert_eq!(err.status(), Some(503));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_unauthorized_status() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/balances"))
        .respond_with(ResponseTemplate::new(401).set_body_json(rejected("Unauthenticated.")))
        .mount(&server)
        .await;

    let err = auth_client(&server).get_balances().await.unwrap_err();

    assert!(matches!(err, RestError::RequestFailed { status: 401 }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_rejected_envelope() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/depth"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(rejected("The selected symbol is invalid.")),
        )
        .mount(&server)
        .await;

    let err = public_client(&server)
        .get_order_book("NOPE")
        .await
        .unwrap_err();

    match err {
        RestError::ExchangeRejected { message } => {
            assert_eq!(message, "The selected symbol is invalid.");
        }
        other => panic!("Expected ExchangeRejected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/depth/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = public_client(&server).get_all_order_books().await.unwrap_err();
    assert!(matches!(err, RestError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    // Reserve a free port, then release it so nothing is listening there
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = ClientConfig::new().with_base_url(format!("http://127.0.0.1:{}", port));
    let client = WallexClient::with_config(config).unwrap();

    let err = client.get_order_book("BTCUSDT").await.unwrap_err();
    assert!(
        matches!(err, RestError::Transport(TransportError::Connect(_))),
        "Expected connect error, got {:?}",
        err
    );
    assert!(err.is_retryable());
}
