//! Ranked alternatives for a pair that failed validation.

use crate::cache::PairCache;

/// Base currencies worth narrowing suggestions by. `BTC` never appears here
/// because normalization rewrites it to `XBT` before validation runs.
const SUGGESTION_PREFIXES: [&str; 2] = ["XBT", "ETH"];

/// Propose known-working pairs similar to `pair` (a canonical symbol).
///
/// Pairs sharing the same three-letter base prefix come back when the base
/// is one we track; otherwise, or when no cached pair shares the prefix,
/// the full working-pairs list is returned. Never empty once the cache has
/// its baseline contents.
pub fn suggest(cache: &PairCache, pair: &str) -> Vec<String> {
    if let Some(prefix) = pair.get(..3) {
        if SUGGESTION_PREFIXES.contains(&prefix) {
            let matches: Vec<String> = cache
                .working_pairs()
                .into_iter()
                .filter(|p| p.starts_with(prefix))
                .collect();
            if !matches.is_empty() {
                return matches;
            }
        }
    }
    cache.working_pairs()
}
