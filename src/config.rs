use std::path::PathBuf;

use crate::api::coingecko::CoinGeckoClient;
use crate::api::nbu::NbuClient;
use crate::api::stooq::StooqClient;

/// Equities tracked on the dashboard (Stooq symbols)
const STOCKS: &[&str] = &[
    "NVDA.US", "AAPL.US", "MSFT.US", "GOOG.US", "GOOGL.US", "AMZN.US", "META.US", "AVGO.US", "TSM.US", "ORCL.US",
    "AMD.US", "ASML.US", "SAP.US", "CSCO.US", "CRM.US", "QCOM.US", "ADBE.US", "INTC.US", "TXN.US", "PLTR.US",
    "CRWD.US", "PYPL.US", "SNPS.US", "NOW.US", "ZS.US", "PANW.US", "9766.JP", "RBLX.US", "DOCU.US", "NET.US",
    "DDOG.US", "OKTA.US", "TEAM.US", "SNOW.US", "FSLR.US", "FVRR.US", "BBY.US", "ETSY.US", "ROKU.US", "SQ.US",
    "TTD.US", "WDAY.US", "DUOL.US", "UPST.US", "ZM.US", "ANET.US", "ARM.US",
];

/// CoinGecko id -> display ticker
const COINS: &[(&str, &str)] = &[
    ("bitcoin", "BTC"),
    ("ethereum", "ETH"),
    ("tether", "USDT"),
    ("binancecoin", "BNB"),
    ("ripple", "XRP"),
    ("usd-coin", "USDC"),
    ("solana", "SOL"),
    ("tron", "TRX"),
    ("dogecoin", "DOGE"),
    ("cardano", "ADA"),
];

/// Which NBU currencies to pick and how to cross them
#[derive(Debug, Clone)]
pub struct FxConfig {
    /// Currency every cross-rate is expressed against
    pub reference: String,
    /// Currencies quoted per one unit of `reference`
    pub others: Vec<String>,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            reference: "USD".to_string(),
            others: vec!["EUR".to_string(), "GBP".to_string()],
        }
    }
}

/// Everything one run needs. There are no flags or config files; `Default`
/// holds the production values and tests build their own.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub stocks: Vec<String>,
    /// (coin id, ticker) in output order
    pub coins: Vec<(String, String)>,
    pub fx: FxConfig,
    pub stooq_base_url: String,
    pub nbu_url: String,
    pub coingecko_base_url: String,
    pub output_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            stocks: STOCKS.iter().map(|s| s.to_string()).collect(),
            coins: COINS
                .iter()
                .map(|(id, ticker)| (id.to_string(), ticker.to_string()))
                .collect(),
            fx: FxConfig::default(),
            stooq_base_url: StooqClient::DEFAULT_BASE_URL.to_string(),
            nbu_url: NbuClient::DEFAULT_URL.to_string(),
            coingecko_base_url: CoinGeckoClient::DEFAULT_BASE_URL.to_string(),
            output_path: PathBuf::from("public/dashboard.json"),
        }
    }
}
