use std::sync::Arc;

use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::json;

use pair_resolver::{MarketData, PairCache, PairResolver, ResolverError, RestMarketData, Settings};

fn settings_for(server: &Server) -> Settings {
    Settings {
        api_base_url: server.url_str("/"),
        api_key_id: None,
        api_secret: None,
        request_timeout_secs: 5,
    }
}

fn ticker_json(pair: &str) -> serde_json::Value {
    json!({
        "pair": pair,
        "timestamp": 1_712_345_678_901u64,
        "bid": "1234500.00",
        "ask": "1234600.00",
        "last_trade": "1234550.00",
        "rolling_24_hour_volume": "72.54",
        "status": "ACTIVE"
    })
}

#[tokio::test]
async fn ticker_fetches_and_decodes() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/1/ticker"))
            .respond_with(json_encoded(ticker_json("XBTZAR"))),
    );

    let market = RestMarketData::new(&settings_for(&server)).unwrap();
    let ticker = market.ticker("XBTZAR").await.unwrap();
    assert_eq!(ticker.pair, "XBTZAR");
    assert_eq!(ticker.last_trade, "1234550.00");
}

#[tokio::test]
async fn venue_error_status_is_surfaced() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/1/ticker"))
            .respond_with(status_code(404)),
    );

    let market = RestMarketData::new(&settings_for(&server)).unwrap();
    match market.ticker("FOOBAR").await {
        Err(ResolverError::Status { pair, status }) => {
            assert_eq!(pair, "FOOBAR");
            assert_eq!(status, 404);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn validation_against_rest_backend() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/1/ticker"))
            .respond_with(status_code(404)),
    );

    let market = Arc::new(RestMarketData::new(&settings_for(&server)).unwrap());
    let cache = PairCache::new();
    cache.add("XBTZAR");
    cache.add("XBTGBP");
    let resolver = PairResolver::with_cache(market, cache);

    let verdict = resolver.validate("XBT-EUR").await;
    assert!(!verdict.valid);
    assert!(verdict.message.contains("404"));
    assert_eq!(verdict.suggestions, vec!["XBTZAR", "XBTGBP"]);
}

#[tokio::test]
async fn market_summary_renders_ticker_and_book() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/1/ticker"))
            .respond_with(json_encoded(ticker_json("XBTZAR"))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/api/1/orderbook_top")).respond_with(
            json_encoded(json!({
                "timestamp": 1_712_345_678_901u64,
                "asks": [
                    {"price": "1234600.00", "volume": "0.10"},
                    {"price": "1234700.00", "volume": "0.25"},
                    {"price": "1234800.00", "volume": "0.50"},
                    {"price": "1234900.00", "volume": "1.00"}
                ],
                "bids": [
                    {"price": "1234500.00", "volume": "0.20"}
                ]
            })),
        ),
    );

    let market = Arc::new(RestMarketData::new(&settings_for(&server)).unwrap());
    let resolver = PairResolver::with_cache(market, PairCache::new());

    let summary = resolver.market_summary("XBTZAR").await.unwrap();
    assert!(summary.contains("Market info for XBTZAR"));
    assert!(summary.contains("Last trade price: 1234550.00"));
    assert!(summary.contains("24-hour volume: 72.54"));
    // Only the top three ask levels are shown.
    assert!(summary.contains("0.50 @ 1234800.00"));
    assert!(!summary.contains("1234900.00"));
    assert!(summary.contains("0.20 @ 1234500.00"));
}
