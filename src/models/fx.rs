//! Exchange rate models

use serde::{Deserialize, Serialize};

use super::OrderedMap;

/// Output of the FX fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxRates {
    /// NBU `exchangedate` of the reference currency, `dd.mm.yyyy`
    pub date: String,
    /// Hryvnia per one unit, keyed USD, EUR, GBP
    pub uah: OrderedMap<f64>,
    /// Units per one US dollar, keyed EUR, GBP
    pub usd: OrderedMap<f64>,
    /// Hryvnia per US dollar
    pub usd_uah: f64,
}

/// The part of `FxRates` that goes into the snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardFx {
    pub date: String,
    pub uah: OrderedMap<f64>,
    pub usd: OrderedMap<f64>,
}

impl From<FxRates> for DashboardFx {
    fn from(fx: FxRates) -> Self {
        Self {
            date: fx.date,
            uah: fx.uah,
            usd: fx.usd,
        }
    }
}
