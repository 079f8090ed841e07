use std::time::Duration;

use crate::config::Settings;
use crate::error::ResolverError;

/// Build the `reqwest::Client` used for venue probes.
///
/// The configured request timeout is applied to the client so an
/// unresponsive venue bounds every probe instead of stalling validation.
/// Certificate verification is enabled by default; setting
/// `RESOLVER_ACCEPT_INVALID_CERTS` to a truthy value (`1`, `true`, `yes`)
/// accepts self-signed certificates for development use only.
pub(crate) fn build(settings: &Settings) -> Result<reqwest::Client, ResolverError> {
    let mut builder =
        reqwest::Client::builder().timeout(Duration::from_secs(settings.request_timeout_secs));
    let allow_invalid = std::env::var("RESOLVER_ACCEPT_INVALID_CERTS")
        .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);
    if allow_invalid {
        builder = builder.danger_accept_invalid_certs(true);
    }
    builder.build().map_err(|e| ResolverError::Http {
        source: e,
        pair: None,
    })
}
