use serde::Deserialize;

/// Default venue API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.luno.com";

/// Default bound on a single probe round trip, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from file and environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
    /// Key id for HTTP basic auth. The ticker endpoint is public, so
    /// credentials are optional here.
    #[serde(default)]
    pub api_key_id: Option<String>,
    #[serde(default)]
    pub api_secret: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key_id: None,
            api_secret: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load settings with defaults, then an optional file, then `RESOLVER_*`
    /// environment variables. Later sources win, so the environment
    /// overrides the file.
    pub fn load_from(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?;
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }
        let cfg = builder
            .add_source(config::Environment::with_prefix("RESOLVER"))
            .build()?;
        cfg.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert!(settings.api_key_id.is_none());
    }

    #[test]
    fn environment_overrides_file() {
        let path = std::env::temp_dir().join("pair_resolver_settings.toml");
        std::fs::write(
            &path,
            "api_base_url = \"https://file.example\"\nrequest_timeout_secs = 3\n",
        )
        .unwrap();
        std::env::set_var("RESOLVER_API_BASE_URL", "https://env.example");

        let settings = Settings::load_from(path.to_str()).unwrap();

        std::env::remove_var("RESOLVER_API_BASE_URL");
        let _ = std::fs::remove_file(&path);

        assert_eq!(settings.api_base_url, "https://env.example");
        // Values the environment does not set still come from the file.
        assert_eq!(settings.request_timeout_secs, 3);
    }
}
