//! Equity quote models

use serde::{Deserialize, Deserializer, Serialize};

use crate::api::stooq::QuoteRow;
use crate::utils::number::text_to_number;

/// One equity quote as written to the snapshot.
///
/// Numeric fields that could not be read are NaN; serde_json writes those as
/// `null`, and they are read back as NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(deserialize_with = "nan_if_null")]
    pub open: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub high: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub low: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub close: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub volume: f64,
}

impl QuoteRecord {
    /// True if any numeric field failed to parse
    pub fn has_gaps(&self) -> bool {
        [self.open, self.high, self.low, self.close, self.volume]
            .iter()
            .any(|v| v.is_nan())
    }
}

impl From<&QuoteRow> for QuoteRecord {
    fn from(row: &QuoteRow) -> Self {
        Self {
            symbol: row.get("Symbol").map(str::to_string),
            date: row.get("Date").map(str::to_string),
            time: row.get("Time").map(str::to_string),
            open: text_to_number(row.get("Open")),
            high: text_to_number(row.get("High")),
            low: text_to_number(row.get("Low")),
            close: text_to_number(row.get("Close")),
            volume: text_to_number(row.get("Volume")),
        }
    }
}

fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_converts_numbers() {
        let row = QuoteRow::parse(
            "Symbol,Date,Time,Open,High,Low,Close,Volume\n\
             MSFT.US,2025-01-10,22:00:05,424.63,424.71,415.02,418.95,20201132",
        )
        .unwrap();
        let quote = QuoteRecord::from(&row);

        assert_eq!(quote.symbol.as_deref(), Some("MSFT.US"));
        assert_eq!(quote.date.as_deref(), Some("2025-01-10"));
        assert_eq!(quote.open, 424.63);
        assert_eq!(quote.high, 424.71);
        assert_eq!(quote.low, 415.02);
        assert_eq!(quote.close, 418.95);
        assert_eq!(quote.volume, 20201132.0);
        assert!(!quote.has_gaps());
    }

    #[test]
    fn test_unknown_symbol_row_keeps_nan_and_serializes_null() {
        let row = QuoteRow::parse(
            "Symbol,Date,Time,Open,High,Low,Close,Volume\n\
             ZZZZ.US,N/D,N/D,N/D,N/D,N/D,N/D,N/D",
        )
        .unwrap();
        let quote = QuoteRecord::from(&row);
        assert!(quote.has_gaps());
        assert!(quote.close.is_nan());

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["symbol"], "ZZZZ.US");
        assert_eq!(json["date"], "N/D");
        assert!(json["open"].is_null());

        let back: QuoteRecord = serde_json::from_value(json).unwrap();
        assert!(back.volume.is_nan());
    }

    #[test]
    fn test_missing_text_columns_are_omitted() {
        let row = QuoteRow::parse("Open,Close\n1,2").unwrap();
        let json = serde_json::to_value(QuoteRecord::from(&row)).unwrap();

        assert!(json.get("symbol").is_none());
        assert_eq!(json["close"], 2.0);
        assert!(json["high"].is_null());
    }
}
