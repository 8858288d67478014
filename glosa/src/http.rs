//! JSON-over-HTTP transport shared by predictors and telemetry sinks.
//!
//! Predictors and the telemetry sink talk to their remote endpoints through
//! [`AsyncHttpClient`], so tests can inject [`tests::MockAsyncHttpClient`]
//! instead of a real network client.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, trace, warn};

/// Default request timeout for the shared client.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur during an HTTP exchange.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HttpError {
    /// Client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
    /// Request could not be sent or timed out in transport
    #[error("Request to {url} failed: {reason}")]
    Request { url: String, reason: String },
    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    /// Response body could not be read
    #[error("Failed to read response from {url}: {reason}")]
    Body { url: String, reason: String },
}

/// POSTs JSON documents and hands back the raw response body.
pub trait AsyncHttpClient: Send + Sync {
    /// Sends `json_body` to `url`.
    ///
    /// Non-2xx statuses are reported as [`HttpError::Status`].
    fn post_json(
        &self,
        url: &str,
        json_body: &str,
    ) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;
}

/// [`AsyncHttpClient`] backed by a pooled `reqwest::Client`.
///
/// Cloning is cheap and shares the underlying connection pool, so one
/// client is built at startup and handed to every predictor and sink.
#[derive(Clone)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
}

impl AsyncReqwestClient {
    /// Creates a new client with the default timeout.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(DEFAULT_HTTP_TIMEOUT)
    }

    /// Creates a new client with a custom transport timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("glosa/", env!("CARGO_PKG_VERSION")))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(30))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| HttpError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for AsyncReqwestClient {
    async fn post_json(&self, url: &str, json_body: &str) -> Result<Vec<u8>, HttpError> {
        trace!(url, "POST");

        let response = match self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(json_body.to_string())
            .send()
            .await
        {
            Ok(resp) => {
                debug!(
                    url = url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                return Err(HttpError::Request {
                    url: url.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        if !response.status().is_success() {
            return Err(HttpError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| HttpError::Body {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock async HTTP client for testing.
    ///
    /// Returns a canned response after an optional delay and records every
    /// request it receives.
    #[derive(Clone)]
    pub struct MockAsyncHttpClient {
        pub response: Result<Vec<u8>, HttpError>,
        pub delay: Option<Duration>,
        pub requests: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl MockAsyncHttpClient {
        pub fn ok(body: &str) -> Self {
            Self {
                response: Ok(body.as_bytes().to_vec()),
                delay: None,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn err(error: HttpError) -> Self {
            Self {
                response: Err(error),
                delay: None,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn recorded(&self) -> Vec<(String, String)> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl AsyncHttpClient for MockAsyncHttpClient {
        async fn post_json(&self, url: &str, json_body: &str) -> Result<Vec<u8>, HttpError> {
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), json_body.to_string()));
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let mock = MockAsyncHttpClient::ok("{}");

        let result = mock.post_json("http://example.com", "{\"a\":1}").await;
        assert_eq!(result.unwrap(), b"{}".to_vec());
        assert_eq!(
            mock.recorded(),
            vec![("http://example.com".to_string(), "{\"a\":1}".to_string())]
        );
    }

    #[tokio::test]
    async fn test_mock_returns_configured_error() {
        let mock = MockAsyncHttpClient::err(HttpError::Status {
            status: 503,
            url: "http://example.com".to_string(),
        });

        let result = mock.post_json("http://example.com", "{}").await;
        assert!(matches!(result, Err(HttpError::Status { status: 503, .. })));
    }

    #[test]
    fn test_client_builds() {
        assert!(AsyncReqwestClient::with_timeout(Duration::from_secs(2)).is_ok());
    }

    #[test]
    fn test_status_error_display() {
        let err = HttpError::Status {
            status: 404,
            url: "http://x/predict".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 from http://x/predict");
    }
}
