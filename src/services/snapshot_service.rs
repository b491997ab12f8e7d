use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::api::coingecko::CoinGeckoClient;
use crate::api::nbu::NbuClient;
use crate::api::stooq::StooqClient;
use crate::api::HttpFetch;
use crate::config::DashboardConfig;
use crate::models::DashboardSnapshot;
use crate::services::{crypto_service, fx_service, stock_service};
use crate::utils::number::whole_floats_to_integers;
use crate::utils::SnapshotError;

/// Fetch everything and build one snapshot.
///
/// The three sources run concurrently; the first failure cancels the others
/// and is returned.
pub async fn collect_snapshot(
    http: Arc<dyn HttpFetch>,
    config: &DashboardConfig,
) -> Result<DashboardSnapshot, SnapshotError> {
    let stooq = StooqClient::with_base_url(http.clone(), config.stooq_base_url.clone());
    let nbu = NbuClient::with_url(http.clone(), config.nbu_url.clone());
    let coingecko = CoinGeckoClient::with_base_url(http, config.coingecko_base_url.clone());

    info!(
        "Collecting snapshot: {} stocks, {} coins",
        config.stocks.len(),
        config.coins.len()
    );

    let (stocks, fx, crypto) = tokio::try_join!(
        async { stock_service::get_stocks(&stooq, &config.stocks).await.map_err(SnapshotError::from) },
        fx_service::get_fx(&nbu, &config.fx),
        async { crypto_service::get_crypto(&coingecko, &config.coins).await.map_err(SnapshotError::from) },
    )?;

    Ok(DashboardSnapshot {
        updated_at: Utc::now(),
        fx: fx.into(),
        crypto,
        stocks,
    })
}

/// Serialize with 2-space indentation and replace the file at `path`.
///
/// Whole numbers are written without a fraction (`233`, not `233.0`).
pub async fn write_snapshot(snapshot: &DashboardSnapshot, path: &Path) -> Result<(), SnapshotError> {
    let mut value = serde_json::to_value(snapshot)?;
    whole_floats_to_integers(&mut value);
    let json = serde_json::to_string_pretty(&value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| SnapshotError::Write { path: path.to_path_buf(), source })?;
    }

    tokio::fs::write(path, json)
        .await
        .map_err(|source| SnapshotError::Write { path: path.to_path_buf(), source })?;

    debug!("Wrote snapshot to {}", path.display());
    Ok(())
}

/// One full run: collect, then write. Nothing is written if collection fails.
pub async fn update_dashboard(http: Arc<dyn HttpFetch>, config: &DashboardConfig) -> Result<(), SnapshotError> {
    let snapshot = collect_snapshot(http, config).await?;
    write_snapshot(&snapshot, &config.output_path).await?;
    Ok(())
}
