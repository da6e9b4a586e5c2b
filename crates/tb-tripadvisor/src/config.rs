use std::time::Duration;

use derive_builder::Builder;

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_LANGUAGE_CODE, DEFAULT_TIMEOUT};

/// Configuration for a [`crate::Client`].
///
/// Built via [`Config::builder`]; only `key` is required, everything else
/// falls back to the documented defaults.
#[derive(Builder, Clone, Debug)]
#[builder(setter(into))]
pub struct Config {
    /// The TripAdvisor partner API key.
    ///
    /// Request one at
    /// https://developer-tripadvisor.com/content-api/request-api-access/
    /// if you do not have one. The key is not validated locally; the API
    /// rejects missing or invalid keys at request time.
    pub key: String,
    /// The language code for localization, ie: `en_UK`.
    ///
    /// NOTE: the observed wire contract does not transmit this value as a
    /// request parameter; it is carried as configuration only.
    #[builder(default = "DEFAULT_LANGUAGE_CODE.to_string()")]
    pub language_code: String,
    /// The base endpoint for the API. Override for testing or versioned
    /// deployments; a trailing slash is appended if missing.
    #[builder(default = "DEFAULT_ENDPOINT.to_string()")]
    pub endpoint: String,
    /// Bounds each request as a whole, not time-to-first-byte.
    #[builder(default = "DEFAULT_TIMEOUT")]
    pub timeout: Duration,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}
