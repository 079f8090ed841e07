//! Boundary to the venue's market-data API.
//!
//! The resolver only needs one question answered: does this canonical pair
//! have a live ticker right now? The [`MarketData`] trait keeps that
//! capability injectable so tests can substitute a stub, while
//! [`RestMarketData`] talks to the real REST endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::ResolverError;
use crate::http_client;

/// Current ticker for one pair. Prices are decimal strings exactly as the
/// venue sends them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticker {
    pub pair: String,
    /// Venue timestamp (ms).
    pub timestamp: i64,
    pub bid: String,
    pub ask: String,
    pub last_trade: String,
    #[serde(rename = "rolling_24_hour_volume")]
    pub rolling_24h_volume: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// One price level of the order book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookEntry {
    pub price: String,
    pub volume: String,
}

/// Top of the order book for one pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBook {
    /// Venue timestamp (ms).
    pub timestamp: i64,
    pub asks: Vec<OrderBookEntry>,
    pub bids: Vec<OrderBookEntry>,
}

/// Market-data capability consumed by the resolver.
///
/// Any error is treated uniformly as "could not confirm the pair"; the
/// resolver does not distinguish an unknown symbol from a transport or auth
/// failure.
#[async_trait]
pub trait MarketData: Send + Sync {
    async fn ticker(&self, pair: &str) -> Result<Ticker, ResolverError>;
    async fn order_book(&self, pair: &str) -> Result<OrderBook, ResolverError>;
}

pub type DynMarketData = Arc<dyn MarketData>;

/// [`MarketData`] implementation against the venue REST API.
pub struct RestMarketData {
    client: reqwest::Client,
    base_url: String,
    credentials: Option<(String, String)>,
}

impl RestMarketData {
    pub fn new(settings: &Settings) -> Result<Self, ResolverError> {
        let client = http_client::build(settings)?;
        let credentials = match (&settings.api_key_id, &settings.api_secret) {
            (Some(id), Some(secret)) => Some((id.clone(), secret.clone())),
            _ => None,
        };
        Ok(Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        pair: &str,
    ) -> Result<T, ResolverError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.get(&url).query(&[("pair", pair)]);
        if let Some((id, secret)) = &self.credentials {
            req = req.basic_auth(id, Some(secret));
        }
        let resp = req.send().await.map_err(|e| ResolverError::Http {
            source: e,
            pair: Some(pair.to_string()),
        })?;
        if !resp.status().is_success() {
            return Err(ResolverError::Status {
                pair: pair.to_string(),
                status: resp.status().as_u16(),
            });
        }
        resp.json().await.map_err(|e| ResolverError::Http {
            source: e,
            pair: Some(pair.to_string()),
        })
    }
}

#[async_trait]
impl MarketData for RestMarketData {
    async fn ticker(&self, pair: &str) -> Result<Ticker, ResolverError> {
        self.get_json("/api/1/ticker", pair).await
    }

    async fn order_book(&self, pair: &str) -> Result<OrderBook, ResolverError> {
        self.get_json("/api/1/orderbook_top", pair).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_deserializes_venue_payload() {
        let json = r#"{
            "pair": "XBTZAR",
            "timestamp": 1712345678901,
            "bid": "1234500.00",
            "ask": "1234600.00",
            "last_trade": "1234550.00",
            "rolling_24_hour_volume": "72.54",
            "status": "ACTIVE"
        }"#;
        let ticker: Ticker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.pair, "XBTZAR");
        assert_eq!(ticker.rolling_24h_volume, "72.54");
        assert_eq!(ticker.status.as_deref(), Some("ACTIVE"));
    }

    #[test]
    fn order_book_deserializes_venue_payload() {
        let json = r#"{
            "timestamp": 1712345678901,
            "asks": [{"price": "100.0", "volume": "0.5"}],
            "bids": [{"price": "99.0", "volume": "1.5"}]
        }"#;
        let book: OrderBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.asks.len(), 1);
        assert_eq!(book.bids[0].price, "99.0");
    }
}
