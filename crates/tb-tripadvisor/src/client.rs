use std::future::Future;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::{ClientInitError, ErrorEnvelope, GetError};
use crate::location::LocationResponse;
use crate::review::ReviewResponse;

/// Access to the location endpoints of the API.
///
/// [`Client`] is the real implementation; test doubles can implement this
/// trait to stand in for it.
pub trait LocationApi {
    /// Fetch the details of a location by its ID.
    fn get_location(
        &self,
        location_id: i32,
    ) -> impl Future<Output = Result<LocationResponse, GetError>> + Send;

    /// Fetch the reviews of a location by its ID.
    fn get_reviews(
        &self,
        location_id: i32,
    ) -> impl Future<Output = Result<ReviewResponse, GetError>> + Send;
}

/// A TripAdvisor content API client.
///
/// Holds immutable configuration and a pooled HTTP transport, so a single
/// instance is cheap to clone and safe to share across concurrent calls.
/// Each call is a single request/response exchange; nothing is retried.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    /// Create a client from a [`Config`].
    ///
    /// The configured timeout bounds each request as a whole and is
    /// installed on the underlying HTTP client here. A missing trailing
    /// slash on the endpoint is appended so path segments concatenate
    /// cleanly.
    pub fn new(mut config: Config) -> Result<Self, ClientInitError> {
        if !config.endpoint.ends_with('/') {
            config.endpoint.push('/');
        }
        let http = reqwest::Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Race a `get_location` call against a caller-supplied cancel signal.
    ///
    /// Returns [`GetError::Cancelled`] as soon as `cancel` resolves; the
    /// in-flight request is dropped, which aborts it.
    pub async fn get_location_with_cancel(
        &self,
        location_id: i32,
        cancel: impl Future<Output = ()>,
    ) -> Result<LocationResponse, GetError> {
        tokio::select! {
            _ = cancel => Err(GetError::Cancelled),
            result = self.get_location(location_id) => result,
        }
    }

    /// Race a `get_reviews` call against a caller-supplied cancel signal.
    pub async fn get_reviews_with_cancel(
        &self,
        location_id: i32,
        cancel: impl Future<Output = ()>,
    ) -> Result<ReviewResponse, GetError> {
        tokio::select! {
            _ = cancel => Err(GetError::Cancelled),
            result = self.get_reviews(location_id) => result,
        }
    }

    fn location_url(&self, location_id: i32) -> String {
        format!(
            "{}location/{}?key={}",
            self.config.endpoint, location_id, self.config.key
        )
    }

    fn reviews_url(&self, location_id: i32) -> String {
        format!(
            "{}location/{}/reviews?key={}",
            self.config.endpoint, location_id, self.config.key
        )
    }

    /// Issue a GET and decode the body.
    ///
    /// Non-2xx statuses become [`GetError::Api`] with the provider's error
    /// envelope decoded best-effort; 2xx bodies that fail to parse become
    /// [`GetError::Decode`] with the raw body attached.
    async fn call_api<T: DeserializeOwned>(&self, url: String) -> Result<T, GetError> {
        debug!(%url, "requesting");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(GetError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let envelope = ErrorEnvelope::from_body(&body);
            return Err(GetError::Api {
                status,
                code: envelope.error.code,
                error_type: envelope.error.error_type,
                message: envelope.error.message,
            });
        }
        let body = response.text().await.map_err(GetError::Transport)?;
        serde_json::from_str(&body).map_err(|source| GetError::Decode { source, body })
    }
}

impl LocationApi for Client {
    async fn get_location(&self, location_id: i32) -> Result<LocationResponse, GetError> {
        self.call_api(self.location_url(location_id)).await
    }

    async fn get_reviews(&self, location_id: i32) -> Result<ReviewResponse, GetError> {
        self.call_api(self.reviews_url(location_id)).await
    }
}
