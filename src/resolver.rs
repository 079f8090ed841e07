//! Validation of user-supplied pairs and the public facade of the crate.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::cache::PairCache;
use crate::discovery::{self, DiscoveryHandle};
use crate::error::ResolverError;
use crate::market::DynMarketData;
use crate::normalize::normalize;
use crate::suggest;

/// Outcome of validating one raw input symbol.
///
/// Serializes with the field names the host tool layer has always shown to
/// users (`is_valid`, `original_pair`, `normalized_pair`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(rename = "is_valid")]
    pub valid: bool,
    #[serde(rename = "original_pair")]
    pub original: String,
    #[serde(rename = "normalized_pair")]
    pub pair: String,
    /// Probe error text; empty on success.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Ranked alternatives; populated only when `valid` is false, and then
    /// non-empty once the cache holds at least its baseline.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl Verdict {
    fn ok(original: String, pair: String) -> Self {
        Self {
            valid: true,
            original,
            pair,
            message: String::new(),
            suggestions: Vec::new(),
        }
    }

    fn invalid(original: String, pair: String, message: String, suggestions: Vec<String>) -> Self {
        Self {
            valid: false,
            original,
            pair,
            message,
            suggestions,
        }
    }
}

/// Trading-pair resolution engine.
///
/// Owns the pair cache and a [`MarketData`](crate::market::MarketData)
/// capability. All failures are folded into [`Verdict`] values; nothing here
/// panics past this boundary.
pub struct PairResolver {
    market: DynMarketData,
    cache: PairCache,
}

impl PairResolver {
    /// Resolver with the cache seeded from the baseline pair list. Seeding
    /// happens synchronously, so requests served before discovery completes
    /// still see the known-good pairs.
    pub fn new(market: DynMarketData) -> Self {
        Self {
            market,
            cache: PairCache::seeded(),
        }
    }

    /// Resolver over an explicitly constructed cache.
    pub fn with_cache(market: DynMarketData, cache: PairCache) -> Self {
        Self { market, cache }
    }

    /// Validate a raw user-supplied pair.
    ///
    /// Cache hits answer immediately. On a miss a single live probe runs;
    /// success grows the cache permanently, so a previously unknown but
    /// valid pair is only ever probed once. Probe failure of any kind means
    /// "could not confirm" and yields suggestions instead.
    pub async fn validate(&self, raw: &str) -> Verdict {
        let pair = normalize(raw);
        if self.cache.contains(&pair) {
            return Verdict::ok(raw.to_string(), pair);
        }
        match self.market.ticker(&pair).await {
            Ok(_) => {
                self.cache.add(&pair);
                Verdict::ok(raw.to_string(), pair)
            }
            Err(e) => {
                tracing::debug!(%pair, error = %e, "pair failed validation");
                let suggestions = suggest::suggest(&self.cache, &pair);
                let message = format!("invalid trading pair {pair}: {e}");
                Verdict::invalid(raw.to_string(), pair, message, suggestions)
            }
        }
    }

    /// Pairs currently known to work, in discovery order. Falls back to the
    /// baseline list while the cache is empty.
    pub fn working_pairs(&self) -> Vec<String> {
        self.cache.working_pairs()
    }

    /// Launch the one-shot background discovery sweep. Fire-and-forget for
    /// the host, but the returned handle supports cancellation and awaiting.
    pub fn start_discovery(&self, shutdown: CancellationToken) -> DiscoveryHandle {
        discovery::spawn(self.market.clone(), self.cache.clone(), shutdown)
    }

    /// Human-readable snapshot of the market for a validated pair: ticker
    /// prices plus the top three levels of each order-book side.
    pub async fn market_summary(&self, pair: &str) -> Result<String, ResolverError> {
        let ticker = self.market.ticker(pair).await?;
        let book = self.market.order_book(pair).await?;

        let mut out = String::new();
        let _ = writeln!(out, "Market info for {pair}:");
        let _ = writeln!(out, "Last trade price: {}", ticker.last_trade);
        let _ = writeln!(out, "Ask (sell) price: {}", ticker.ask);
        let _ = writeln!(out, "Bid (buy) price: {}", ticker.bid);
        let _ = writeln!(out, "24-hour volume: {}", ticker.rolling_24h_volume);
        if !book.asks.is_empty() {
            let _ = writeln!(out, "Top asks:");
            for entry in book.asks.iter().take(3) {
                let _ = writeln!(out, "  {} @ {}", entry.volume, entry.price);
            }
        }
        if !book.bids.is_empty() {
            let _ = writeln!(out, "Top bids:");
            for entry in book.bids.iter().take(3) {
                let _ = writeln!(out, "  {} @ {}", entry.volume, entry.price);
            }
        }
        Ok(out)
    }
}
