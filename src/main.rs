use std::sync::Arc;
use std::time::Instant;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod models;
mod services;
mod utils;

use api::ReqwestFetcher;
use config::DashboardConfig;
use services::snapshot_service;
use utils::SnapshotError;

async fn run(config: &DashboardConfig) -> Result<(), SnapshotError> {
    let http = Arc::new(ReqwestFetcher::new()?);
    snapshot_service::update_dashboard(http, config).await
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing; logs go to stderr so stdout only carries the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("market_snapshot=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let config = DashboardConfig::default();
    let started = Instant::now();
    info!("Updating market snapshot...");

    match run(&config).await {
        Ok(()) => {
            info!("Snapshot complete in {:.1}s", started.elapsed().as_secs_f64());
            println!("Updated {}", config.output_path.display());
        }
        Err(e) => {
            error!("Snapshot failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
