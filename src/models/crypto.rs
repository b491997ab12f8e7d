//! Crypto price models

use serde::{Deserialize, Serialize};

use super::OrderedMap;

/// Prices keyed by ticker. `None` means the upstream had no price for the pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoPrices {
    pub usd: OrderedMap<Option<f64>>,
    pub uah: OrderedMap<Option<f64>>,
}
