use std::sync::Arc;

use super::models::NbuRate;
use crate::api::http::{decode_json, ApiError, HttpFetch};

/// National Bank of Ukraine official exchange rate client
pub struct NbuClient {
    http: Arc<dyn HttpFetch>,
    url: String,
}

impl NbuClient {
    pub const DEFAULT_URL: &'static str =
        "https://bank.gov.ua/NBUStatService/v1/statdirectory/exchange?json";

    /// Create a new NBU client
    pub fn new(http: Arc<dyn HttpFetch>) -> Self {
        Self::with_url(http, Self::DEFAULT_URL.to_string())
    }

    /// Create a new client with custom endpoint URL (for testing)
    pub fn with_url(http: Arc<dyn HttpFetch>, url: String) -> Self {
        Self { http, url }
    }

    /// GET statdirectory/exchange
    ///
    /// Returns today's table, one entry per currency, in upstream order.
    pub async fn get_rates(&self) -> Result<Vec<NbuRate>, ApiError> {
        let body = self.http.get_text(&self.url).await?;
        decode_json(&self.url, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::http::mock::MockFetcher;

    #[tokio::test]
    async fn test_get_rates_ignores_extra_fields() {
        let body = r#"[
            {"r030":840,"txt":"Долар США","rate":41.2,"cc":"USD","exchangedate":"10.01.2025"},
            {"r030":978,"txt":"Євро","rate":42.5,"cc":"EUR","exchangedate":"10.01.2025"}
        ]"#;
        let http = Arc::new(MockFetcher::new().with(NbuClient::DEFAULT_URL, 200, body));
        let rates = NbuClient::new(http).get_rates().await.unwrap();

        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].cc, "USD");
        assert_eq!(rates[1].rate, Some(42.5));
        assert_eq!(rates[1].exchangedate.as_deref(), Some("10.01.2025"));
    }

    #[tokio::test]
    async fn test_get_rates_rejects_non_array() {
        let http = Arc::new(MockFetcher::new().with(NbuClient::DEFAULT_URL, 200, r#"{"error":"x"}"#));
        let err = NbuClient::new(http).get_rates().await.unwrap_err();
        assert!(matches!(err, ApiError::Deserialization { .. }));
    }
}
