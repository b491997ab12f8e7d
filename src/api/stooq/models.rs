use std::collections::HashMap;

/// One quote from the Stooq light CSV endpoint (`&h&e=csv`).
///
/// The body is a header line followed by a single data line, e.g.
/// `Symbol,Date,Time,Open,High,Low,Close,Volume` /
/// `AAPL.US,2025-01-10,22:00:09,240.01,240.16,233,236.85,61710856`.
/// Values are kept as text; numeric conversion happens in the domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRow {
    fields: HashMap<String, Option<String>>,
}

impl QuoteRow {
    /// Parse a CSV body. Returns `None` when there is no data line.
    ///
    /// Header names missing a value in the data line map to `None`; a repeated
    /// header name keeps its last value.
    pub fn parse(body: &str) -> Option<Self> {
        let mut lines = body.trim().split('\n');
        let header = split_csv_line(lines.next()?);
        let row = split_csv_line(lines.next()?);

        let fields = header
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name, row.get(i).cloned()))
            .collect();

        Some(Self { fields })
    }

    /// Value of a named column, if the data line had one
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_deref())
    }
}

/// Plain comma split with trimmed fields. Stooq never quotes the columns we request.
fn split_csv_line(line: &str) -> Vec<String> {
    line.split(',').map(|s| s.trim().to_string()).collect()
}
