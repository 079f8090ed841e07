//! Canonicalization of loosely formatted trading-pair symbols.
//!
//! User input arrives in many shapes (`btc-gbp`, `BTC/GBP`, `BITCOINUSD`).
//! The venue expects an uppercase, separator-free `<BASE><QUOTE>` symbol and
//! uses `XBT` for Bitcoin, so `normalize` strips separators, uppercases and
//! rewrites the common Bitcoin spellings.

/// Substring substitutions applied to the whole uppercased symbol.
///
/// Substitution is deliberately substring-based rather than token-aware;
/// the canonical output contains no `BTC`/`BITCOIN` residue, which keeps
/// the function idempotent.
const SUBSTITUTIONS: [(&str, &str); 2] = [("BITCOIN", "XBT"), ("BTC", "XBT")];

/// Convert a raw user-supplied pair into the venue's canonical form.
///
/// Total and deterministic: never fails, and already-canonical input is
/// returned unchanged.
pub fn normalize(raw: &str) -> String {
    let mut pair: String = raw
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | '/'))
        .collect();
    pair = pair.to_uppercase();
    for (from, to) in SUBSTITUTIONS {
        pair = pair.replace(from, to);
    }
    pair
}
