use std::sync::Arc;

use super::models::QuoteRow;
use crate::api::http::{ApiError, HttpFetch};

/// Stooq light quote client (one CSV request per symbol)
pub struct StooqClient {
    http: Arc<dyn HttpFetch>,
    base_url: String,
}

impl StooqClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://stooq.com";

    /// Create a new Stooq client
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

    /// Request URL for a symbol. The symbol is lower-cased and percent-encoded;
    /// `f=sd2t2ohlcv` selects symbol, date, time, OHLC and volume, `h` adds the header line.
    pub fn quote_url(&self, symbol: &str) -> String {
        let symbol = symbol.to_lowercase();
        format!(
            "{}/q/l/?s={}&f=sd2t2ohlcv&h&e=csv",
            self.base_url,
            urlencoding::encode(&symbol)
        )
    }

    /// GET /q/l/ for one symbol
    ///
    /// # Returns
    /// * `Ok(Some(QuoteRow))` - header and data line present
    /// * `Ok(None)` - the body had fewer than two lines
    /// * `Err(ApiError)` - transport failure or non-2xx status
    pub async fn get_quote(&self, symbol: &str) -> Result<Option<QuoteRow>, ApiError> {
        let url = self.quote_url(symbol);
        let body = self.http.get_text(&url).await?;
        Ok(QuoteRow::parse(&body))
    }
}
