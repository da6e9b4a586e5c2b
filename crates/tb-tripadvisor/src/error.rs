use serde::Deserialize;
use thiserror::Error;

/// Error returned by a `get_location` / `get_reviews` call.
#[derive(Debug, Error)]
pub enum GetError {
    /// The request never produced an HTTP response: DNS failure, refused
    /// connection, broken read/write, or the configured timeout elapsing.
    #[error("the request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// A caller-supplied cancel signal fired before the call completed.
    #[error("the request was cancelled")]
    Cancelled,
    /// The response carried a success status but the body did not parse as
    /// the expected shape. The raw body is kept for diagnostics but not
    /// included in the display message.
    #[error("unable to parse the response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    /// The API answered with a non-2xx status. The code/type/message fields
    /// are decoded from the provider's error envelope on a best-effort
    /// basis and are empty when the body was not valid JSON.
    #[error("code: {code}, type: {error_type}, message: {message}, http status code: {status}")]
    Api {
        status: reqwest::StatusCode,
        code: String,
        error_type: String,
        message: String,
    },
}

/// Error returned when constructing a [`crate::Client`].
#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("unable to build the HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Wire shape of the provider's error body, `{"error": {...}}`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub error: ErrorBody,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub message: String,
}

impl ErrorEnvelope {
    /// Decode an error body, falling back to empty fields when the body is
    /// not the expected JSON. The HTTP status is always carried regardless.
    pub(crate) fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}
