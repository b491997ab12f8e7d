use tracing::info;

use crate::api::nbu::{NbuClient, NbuRate};
use crate::config::FxConfig;
use crate::models::{FxRates, OrderedMap};
use crate::utils::SnapshotError;

/// Fetch the NBU table and derive cross-rates against the reference currency
pub async fn get_fx(client: &NbuClient, config: &FxConfig) -> Result<FxRates, SnapshotError> {
    let table = client.get_rates().await?;
    let fx = derive_rates(&table, config)?;

    info!("Fetched FX rates for {} (1 {} = {} UAH)", fx.date, config.reference, fx.usd_uah);
    Ok(fx)
}

/// Pick the configured currencies out of an NBU table.
///
/// Every code must be present with a rate; the first such row wins. Cross-rates are `reference / other`, both in
/// hryvnia, so the result is units of `other` per one `reference`.
pub fn derive_rates(table: &[NbuRate], config: &FxConfig) -> Result<FxRates, SnapshotError> {
    let pick = |cc: &str| {
        table
            .iter()
            .filter(|r| r.cc == cc)
            .find_map(|r| r.rate.map(|rate| (r, rate)))
    };

    let codes: Vec<&str> = std::iter::once(config.reference.as_str())
        .chain(config.others.iter().map(String::as_str))
        .collect();

    let picked: Option<Vec<(&NbuRate, f64)>> = codes.iter().map(|&cc| pick(cc)).collect();
    let Some(picked) = picked else {
        return Err(SnapshotError::MissingCurrencies(codes.join("/")));
    };

    let (reference, usd_uah) = picked[0];
    let uah: OrderedMap<f64> = picked.iter().map(|(r, rate)| (r.cc.clone(), *rate)).collect();
    let usd: OrderedMap<f64> = picked[1..]
        .iter()
        .map(|(r, rate)| (r.cc.clone(), usd_uah / rate))
        .collect();

    Ok(FxRates {
        date: reference.exchangedate.clone().unwrap_or_default(),
        uah,
        usd,
        usd_uah,
    })
}
