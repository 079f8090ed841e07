//! Concurrency-safe store of trading pairs confirmed tradable.
//!
//! The cache is shared between the background discovery task and any number
//! of concurrent validations, so the set and its insertion order live behind
//! a single mutex. It only ever grows and is not persisted across restarts.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

/// Pairs known to work on the venue, used to seed the cache at startup and
/// as a fallback while the cache is still empty.
pub const BASELINE_PAIRS: [&str; 6] = [
    "XBTZAR", "ETHZAR", "XBTNGN", "XBTGBP", "XBTUSD", "ETHXBT",
];

#[derive(Default)]
struct Inner {
    known: HashSet<String>,
    // Insertion order, kept in lockstep with `known` for stable enumeration.
    order: Vec<String>,
}

/// Cheaply clonable handle to the shared pair cache.
#[derive(Clone, Default)]
pub struct PairCache {
    inner: Arc<Mutex<Inner>>,
}

impl PairCache {
    /// An empty cache. Callers normally want [`PairCache::seeded`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache pre-populated with [`BASELINE_PAIRS`].
    pub fn seeded() -> Self {
        let cache = Self::new();
        for pair in BASELINE_PAIRS {
            cache.add(pair);
        }
        cache
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // No operation can panic while holding the guard, but recover from
        // poisoning anyway rather than propagating a panic to callers.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn contains(&self, pair: &str) -> bool {
        self.lock().known.contains(pair)
    }

    /// Record a pair as tradable. Returns `true` if it was newly inserted.
    pub fn add(&self, pair: &str) -> bool {
        let mut inner = self.lock();
        if inner.known.insert(pair.to_string()) {
            inner.order.push(pair.to_string());
            true
        } else {
            false
        }
    }

    /// Current contents in insertion order.
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().order.clone()
    }

    /// Like [`snapshot`](Self::snapshot), but falls back to
    /// [`BASELINE_PAIRS`] while the cache is empty. The fallback only
    /// matters in the brief window before startup seeding runs.
    pub fn working_pairs(&self) -> Vec<String> {
        let pairs = self.snapshot();
        if pairs.is_empty() {
            BASELINE_PAIRS.iter().map(|p| p.to_string()).collect()
        } else {
            pairs
        }
    }

    pub fn len(&self) -> usize {
        self.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
