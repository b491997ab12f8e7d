use std::sync::Arc;

use super::models::SimplePriceResponse;
use crate::api::http::{decode_json, ApiError, HttpFetch};

/// CoinGecko public API client
pub struct CoinGeckoClient {
    http: Arc<dyn HttpFetch>,
    base_url: String,
}

impl CoinGeckoClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.coingecko.com";

    /// Create a new CoinGecko client
    pub fn new(http: Arc<dyn HttpFetch>) -> Self {
        Self::with_base_url(http, Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a new client with custom base URL (for testing)
    pub fn with_base_url(http: Arc<dyn HttpFetch>, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Request URL for a batch of coin ids priced in `vs_currencies`
    pub fn simple_price_url(&self, ids: &[&str], vs_currencies: &[&str]) -> String {
        format!(
            "{}/api/v3/simple/price?ids={}&vs_currencies={}",
            self.base_url,
            urlencoding::encode(&ids.join(",")),
            vs_currencies.join(",")
        )
    }

    /// GET /api/v3/simple/price for all ids in one request
    pub async fn get_simple_price(
        &self,
        ids: &[&str],
        vs_currencies: &[&str],
    ) -> Result<SimplePriceResponse, ApiError> {
        let url = self.simple_price_url(ids, vs_currencies);
        let body = self.http.get_text(&url).await?;
        decode_json(&url, &body)
    }
}
