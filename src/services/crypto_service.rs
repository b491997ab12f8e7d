use tracing::{info, warn};

use crate::api::coingecko::{CoinGeckoClient, SimplePriceResponse};
use crate::api::ApiError;
use crate::models::{CryptoPrices, OrderedMap};

const VS_CURRENCIES: [&str; 2] = ["usd", "uah"];

/// Fetch USD and UAH prices for every configured coin in one request
pub async fn get_crypto(client: &CoinGeckoClient, coins: &[(String, String)]) -> Result<CryptoPrices, ApiError> {
    let ids: Vec<&str> = coins.iter().map(|(id, _)| id.as_str()).collect();
    let response = client.get_simple_price(&ids, &VS_CURRENCIES).await?;

    let prices = map_to_tickers(&response, coins);
    info!("Fetched crypto prices for {} coins", coins.len());
    Ok(prices)
}

/// Re-key a simple price response from coin id to ticker.
///
/// Coins or currencies the response left out or priced as `null` become `None`.
pub fn map_to_tickers(response: &SimplePriceResponse, coins: &[(String, String)]) -> CryptoPrices {
    let price = |id: &str, vs: &str| response.get(id).and_then(|p| p.get(vs).copied().flatten());

    let mut usd = OrderedMap::new();
    let mut uah = OrderedMap::new();

    for (id, ticker) in coins {
        let (in_usd, in_uah) = (price(id.as_str(), "usd"), price(id.as_str(), "uah"));
        if in_usd.is_none() || in_uah.is_none() {
            warn!("Incomplete price for {} ({}): usd={:?} uah={:?}", ticker, id, in_usd, in_uah);
        }
        usd.insert(ticker.clone(), in_usd);
        uah.insert(ticker.clone(), in_uah);
    }

    CryptoPrices { usd, uah }
}
