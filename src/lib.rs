//! Trading-pair resolution engine.
//!
//! Given a loosely formatted currency-pair symbol (`BTC-GBP`, `btc/gbp`,
//! `BITCOINUSD`), this crate produces the venue's canonical symbol, checks
//! whether the pair is actually tradable, and proposes ranked alternatives
//! when it is not. Confirmed pairs are cached for the life of the process:
//! the cache is seeded with a known-good baseline, grown by a one-shot
//! background discovery sweep at startup, and grown opportunistically as
//! individual validations succeed.
//!
//! ```no_run
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//! use pair_resolver::{PairResolver, RestMarketData, Settings};
//!
//! # async fn example() -> Result<(), pair_resolver::ResolverError> {
//! let settings = Settings::load()?;
//! let market = Arc::new(RestMarketData::new(&settings)?);
//! let resolver = PairResolver::new(market);
//!
//! let shutdown = CancellationToken::new();
//! let _discovery = resolver.start_discovery(shutdown.clone());
//!
//! let verdict = resolver.validate("btc-zar").await;
//! assert_eq!(verdict.pair, "XBTZAR");
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod discovery;
pub mod error;
mod http_client;
pub mod market;
pub mod normalize;
pub mod resolver;
pub mod suggest;

pub use cache::{PairCache, BASELINE_PAIRS};
pub use config::Settings;
pub use discovery::{candidate_universe, DiscoveryHandle};
pub use error::ResolverError;
pub use market::{DynMarketData, MarketData, OrderBook, OrderBookEntry, RestMarketData, Ticker};
pub use normalize::normalize;
pub use resolver::{PairResolver, Verdict};
