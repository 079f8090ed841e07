use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("HTTP request failed for {pair:?}: {source}")]
    Http {
        #[source]
        source: reqwest::Error,
        pair: Option<String>,
    },
    #[error("venue returned status {status} for {pair}")]
    Status { pair: String, status: u16 },
    #[error(transparent)]
    Config(#[from] ::config::ConfigError),
    #[error("{0}")]
    Other(String),
}
