use tracing::{debug, info, warn};

use crate::api::stooq::StooqClient;
use crate::api::ApiError;
use crate::models::QuoteRecord;

/// Fetch quotes for `symbols`, one request at a time, in input order.
///
/// Each request is awaited before the next one starts so the upstream sees at
/// most one connection from us. Symbols whose body has no data line are
/// skipped; any HTTP failure aborts the whole list.
pub async fn get_stocks(client: &StooqClient, symbols: &[String]) -> Result<Vec<QuoteRecord>, ApiError> {
    let mut stocks = Vec::with_capacity(symbols.len());

    for symbol in symbols {
        debug!("Fetching quote for {}", symbol);

        let Some(row) = client.get_quote(symbol).await? else {
            warn!("No quote data for {}, skipping", symbol);
            continue;
        };

        let quote = QuoteRecord::from(&row);
        if quote.has_gaps() {
            warn!("Quote for {} has unparsable numeric fields", symbol);
        }
        stocks.push(quote);
    }

    info!("Fetched {} of {} stock quotes", stocks.len(), symbols.len());
    Ok(stocks)
}
