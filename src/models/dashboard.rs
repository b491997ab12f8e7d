//! The snapshot written for the dashboard page

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::{CryptoPrices, DashboardFx, QuoteRecord};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Written as `2025-01-10T18:04:11.532Z`
    #[serde(serialize_with = "serialize_millis")]
    pub updated_at: DateTime<Utc>,
    pub fx: DashboardFx,
    pub crypto: CryptoPrices,
    pub stocks: Vec<QuoteRecord>,
}

fn serialize_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderedMap;
    use chrono::TimeZone;

    #[test]
    fn test_top_level_keys_and_timestamp_format() {
        let snapshot = DashboardSnapshot {
            updated_at: Utc.with_ymd_and_hms(2025, 1, 10, 18, 4, 11).unwrap(),
            fx: DashboardFx {
                date: "10.01.2025".to_string(),
                uah: OrderedMap::new(),
                usd: OrderedMap::new(),
            },
            crypto: CryptoPrices {
                usd: OrderedMap::new(),
                uah: OrderedMap::new(),
            },
            stocks: Vec::new(),
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["updatedAt"], "2025-01-10T18:04:11.000Z");
        assert_eq!(json["fx"]["date"], "10.01.2025");
        assert!(json["stocks"].as_array().unwrap().is_empty());

        let text = serde_json::to_string(&snapshot).unwrap();
        assert!(text.starts_with(r#"{"updatedAt":"#));
        let back: DashboardSnapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(back.updated_at, snapshot.updated_at);
    }
}
