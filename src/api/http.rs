use async_trait::async_trait;
use reqwest::Client as HttpClient;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while talking to an upstream API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx status from the server
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },
    /// Network/request error (DNS, connection refused, broken body stream)
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },
    /// Body was received but could not be decoded
    #[error("Failed to parse response from {url}: {message}")]
    Deserialization { url: String, message: String },
    /// The HTTP client itself could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Transport used by every API client.
///
/// Only plain GETs returning the body as text are needed; JSON decoding is left
/// to the caller so that the URL can be attached to decoding errors.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String, ApiError>;
}

/// `HttpFetch` backed by a shared reqwest client
pub struct ReqwestFetcher {
    http_client: HttpClient,
}

impl ReqwestFetcher {
    const USER_AGENT: &'static str = concat!("market-snapshot/", env!("CARGO_PKG_VERSION"));

    /// Create a fetcher with no request timeout and no retries
    pub fn new() -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .user_agent(Self::USER_AGENT)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get_text(&self, url: &str) -> Result<String, ApiError> {
        debug!("GET {}", url);

        let response = self.http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            if status.is_server_error() {
                let body_text = response.text().await.unwrap_or_default();
                warn!("Server error {} for {}: {}", status.as_u16(), url, body_text);
            }
            return Err(ApiError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| ApiError::Request {
            url: url.to_string(),
            message: format!("Failed to read body: {}", e),
        })
    }
}

/// Decode a JSON body, attaching the source URL to any error
pub fn decode_json<T: serde::de::DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization {
        url: url.to_string(),
        message: e.to_string(),
    })
}
