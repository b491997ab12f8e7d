use serde::{Deserialize, Serialize};

/// One entry of the NBU daily exchange table.
///
/// `rate` is hryvnia per one unit of `cc`. The endpoint also returns `r030`
/// (numeric ISO code) and `txt` (Ukrainian name), which are not needed here.
/// Fields are optional so an incomplete row for an unused currency does not
/// reject the whole table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NbuRate {
    #[serde(default)]
    pub cc: String,
    #[serde(default)]
    pub rate: Option<f64>,
    #[serde(default)]
    pub exchangedate: Option<String>,
}
