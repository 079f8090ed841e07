//! Background discovery of tradable pairs.
//!
//! At startup the resolver sweeps a generated candidate universe against the
//! ticker endpoint once, recording every pair that answers. The sweep runs
//! as a spawned task so startup never blocks on it; lookups that race ahead
//! of it simply fall back to their own on-demand probe.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::cache::PairCache;
use crate::market::DynMarketData;

const BASE_CURRENCIES: [&str; 5] = ["XBT", "ETH", "XRP", "LTC", "BCH"];
const QUOTE_CURRENCIES: [&str; 8] = ["ZAR", "NGN", "GBP", "EUR", "USD", "MYR", "IDR", "UGX"];
const CRYPTO_CROSSES: [&str; 4] = ["ETHXBT", "XRPXBT", "LTCXBT", "BCHXBT"];

/// Candidate symbols to probe: every base/quote combination plus the fixed
/// crypto-to-crypto crosses. Ephemeral; only used while a sweep runs.
pub fn candidate_universe() -> Vec<String> {
    let mut candidates = Vec::with_capacity(BASE_CURRENCIES.len() * QUOTE_CURRENCIES.len() + CRYPTO_CROSSES.len());
    for base in BASE_CURRENCIES {
        for quote in QUOTE_CURRENCIES {
            candidates.push(format!("{base}{quote}"));
        }
    }
    for cross in CRYPTO_CROSSES {
        candidates.push(cross.to_string());
    }
    candidates
}

/// Handle to a running discovery sweep.
///
/// The host is free to drop it, but keeping it allows graceful shutdown to
/// cancel the sweep and tests to await its result deterministically.
pub struct DiscoveryHandle {
    token: CancellationToken,
    task: JoinHandle<Vec<String>>,
}

impl DiscoveryHandle {
    /// Stop the sweep; any probe in flight is dropped, not awaited.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the sweep and return the pairs it confirmed.
    pub async fn join(self) -> Vec<String> {
        self.task.await.unwrap_or_default()
    }
}

/// Spawn one discovery sweep. `shutdown` is the host's lifecycle token; the
/// sweep stops early when it fires.
pub(crate) fn spawn(
    market: DynMarketData,
    cache: PairCache,
    shutdown: CancellationToken,
) -> DiscoveryHandle {
    let token = shutdown.child_token();
    let task = tokio::spawn(run(market, cache, token.clone()));
    DiscoveryHandle { token, task }
}

async fn run(market: DynMarketData, cache: PairCache, cancel: CancellationToken) -> Vec<String> {
    let mut confirmed = Vec::new();
    for pair in candidate_universe() {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(found = confirmed.len(), "pair discovery cancelled");
                return confirmed;
            }
            res = market.ticker(&pair) => match res {
                Ok(ticker) => {
                    tracing::info!(%pair, last_trade = %ticker.last_trade, "discovered tradable pair");
                    cache.add(&pair);
                    confirmed.push(pair.clone());
                }
                Err(e) => {
                    tracing::debug!(%pair, error = %e, "candidate not tradable");
                }
            }
        }
    }
    tracing::info!(found = confirmed.len(), "pair discovery complete");
    confirmed
}
