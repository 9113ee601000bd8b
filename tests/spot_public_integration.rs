use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use binance_api_client::error::{BinanceError, ErrorKind, error_codes};
use binance_api_client::spot::rest::SpotRestClient;
use binance_api_client::spot::rest::public::{AggTradesRequest, CandlestickRequest};
use binance_api_client::types::CandlestickInterval;

/// Run a blocking client call off the async test runtime.
async fn with_public_client<T, F>(server: &MockServer, call: F) -> T
where
    T: Send + 'static,
    F: FnOnce(&SpotRestClient) -> T + Send + 'static,
{
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let client = SpotRestClient::builder().base_url(uri).build().unwrap();
        call(&client)
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_ping() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    with_public_client(&server, |client| client.ping())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_server_time() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/time"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "serverTime": 1_499_827_319_559u64 })),
        )
        .mount(&server)
        .await;

    let time = with_public_client(&server, |client| client.get_server_time())
        .await
        .unwrap();
    assert_eq!(time, 1_499_827_319_559);
}

#[tokio::test]
async fn test_get_order_book_with_limit() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "lastUpdateId": 1027024,
        "bids": [["4.00000000", "431.00000000", []]],
        "asks": [["4.00000200", "12.00000000", []]]
    });

    Mock::given(method("GET"))
        .and(path("/api/v3/depth"))
        .and(query_param("symbol", "BNBBTC"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let book = with_public_client(&server, |client| client.get_order_book("BNBBTC", Some(5)))
        .await
        .unwrap();
    assert_eq!(book.last_update_id, 1027024);
    assert_eq!(book.best_bid().unwrap().price.to_string(), "4.00000000");
    assert_eq!(book.best_ask().unwrap().qty.to_string(), "12.00000000");
}

#[tokio::test]
async fn test_get_order_book_without_limit_omits_param() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "lastUpdateId": 1, "bids": [], "asks": [] });

    Mock::given(method("GET"))
        .and(path("/api/v3/depth"))
        .and(query_param("symbol", "BNBBTC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let book = with_public_client(&server, |client| client.get_order_book("BNBBTC", None))
        .await
        .unwrap();
    assert!(book.bids.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("symbol=BNBBTC"));
}

#[tokio::test]
async fn test_agg_trades_shorthand_matches_unfiltered_request() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "a": 26129,
        "p": "0.01633102",
        "q": "4.70443515",
        "f": 27781,
        "l": 27781,
        "T": 1498793709153u64,
        "m": true,
        "M": true
    }]);

    Mock::given(method("GET"))
        .and(path("/api/v3/aggTrades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let (short, full) = with_public_client(&server, |client| {
        let short = client.get_agg_trades("BNBBTC").unwrap();
        let full = client
            .get_agg_trades_with(&AggTradesRequest::new("BNBBTC"))
            .unwrap();
        (short, full)
    })
    .await;

    assert_eq!(short.len(), 1);
    assert_eq!(short[0].aggregated_trade_id, full[0].aggregated_trade_id);
    assert_eq!(short[0].price.to_string(), "0.01633102");
    assert!(short[0].is_buyer_maker);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url.query(), Some("symbol=BNBBTC"));
    assert_eq!(requests[0].url.query(), requests[1].url.query());
}

#[tokio::test]
async fn test_agg_trades_with_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/aggTrades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let request = AggTradesRequest::new("BNBBTC")
        .limit(10)
        .time_range(1_498_793_709_000, 1_498_793_710_000);
    let trades = with_public_client(&server, move |client| client.get_agg_trades_with(&request))
        .await
        .unwrap();
    assert!(trades.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("symbol=BNBBTC&limit=10&startTime=1498793709000&endTime=1498793710000")
    );
}

#[tokio::test]
async fn test_get_candlestick_bars() {
    let server = MockServer::start().await;
    let response = serde_json::json!([[
        1499040000000u64,
        "0.01634790",
        "0.80000000",
        "0.01575800",
        "0.01577100",
        "148976.11427815",
        1499644799999u64,
        "2434.19055334",
        308,
        "1756.87402397",
        "28.46694368",
        "17928899.62484339"
    ]]);

    Mock::given(method("GET"))
        .and(path("/api/v3/klines"))
        .and(query_param("symbol", "BNBBTC"))
        .and(query_param("interval", "5m"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let bars = with_public_client(&server, |client| {
        client.get_candlestick_bars("BNBBTC", CandlestickInterval::FiveMinutes)
    })
    .await
    .unwrap();
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].open_time, 1499040000000);
    assert_eq!(bars[0].close.to_string(), "0.01577100");
    assert_eq!(bars[0].number_of_trades, 308);
}

#[tokio::test]
async fn test_get_candlestick_bars_with_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/klines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let request = CandlestickRequest::new("ETHBTC", CandlestickInterval::Hourly).limit(3);
    with_public_client(&server, move |client| client.get_candlestick_bars_with(&request))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("symbol=ETHBTC&interval=1h&limit=3")
    );
}

#[tokio::test]
async fn test_get_24hr_price_statistics() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "symbol": "BNBBTC",
        "priceChange": "-94.99999800",
        "priceChangePercent": "-95.960",
        "weightedAvgPrice": "0.29628482",
        "prevClosePrice": "0.10002000",
        "lastPrice": "4.00000200",
        "lastQty": "200.00000000",
        "bidPrice": "4.00000000",
        "bidQty": "100.00000000",
        "askPrice": "4.00000200",
        "askQty": "100.00000000",
        "openPrice": "99.00000000",
        "highPrice": "100.00000000",
        "lowPrice": "0.10000000",
        "volume": "8913.30000000",
        "quoteVolume": "15.30000000",
        "openTime": 1499783499040u64,
        "closeTime": 1499869899040u64,
        "firstId": 28385,
        "lastId": 28460,
        "count": 76
    });

    Mock::given(method("GET"))
        .and(path("/api/v3/ticker/24hr"))
        .and(query_param("symbol", "BNBBTC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let stats = with_public_client(&server, |client| client.get_24hr_price_statistics("BNBBTC"))
        .await
        .unwrap();
    assert_eq!(stats.symbol, "BNBBTC");
    assert_eq!(stats.last_price.to_string(), "4.00000200");
    assert_eq!(stats.price_change_percent.to_string(), "-95.960");
}

#[tokio::test]
async fn test_get_all_prices() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        { "symbol": "LTCBTC", "price": "4.00000200" },
        { "symbol": "ETHBTC", "price": "0.07946600" }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/v3/ticker/price"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let prices = with_public_client(&server, |client| client.get_all_prices())
        .await
        .unwrap();
    assert_eq!(prices.len(), 2);
    assert_eq!(prices[1].symbol, "ETHBTC");
    assert_eq!(prices[1].price.to_string(), "0.07946600");
}

#[tokio::test]
async fn test_get_book_tickers() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "symbol": "LTCBTC",
        "bidPrice": "4.00000000",
        "bidQty": "431.00000000",
        "askPrice": "4.00000200",
        "askQty": "9.00000000"
    }]);

    Mock::given(method("GET"))
        .and(path("/api/v3/ticker/bookTicker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let tickers = with_public_client(&server, |client| client.get_book_tickers())
        .await
        .unwrap();
    assert_eq!(tickers.len(), 1);
    assert_eq!(tickers[0].spread().to_string(), "0.00000200");
}

#[tokio::test]
async fn test_invalid_symbol_error() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "code": -1121, "msg": "Invalid symbol." });

    Mock::given(method("GET"))
        .and(path("/api/v3/ticker/24hr"))
        .respond_with(ResponseTemplate::new(400).set_body_json(response))
        .mount(&server)
        .await;

    let err = with_public_client(&server, |client| client.get_24hr_price_statistics("NOPE"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Remote);
    match err {
        BinanceError::Api(api) => {
            assert_eq!(api.code, error_codes::BAD_SYMBOL);
            assert_eq!(api.message, "Invalid symbol.");
            assert_eq!(api.status, 400);
            assert!(api.is_invalid_symbol());
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/time"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = with_public_client(&server, |client| client.get_server_time())
        .await
        .unwrap_err();
    assert!(matches!(err, BinanceError::InvalidResponse(_)));
}
