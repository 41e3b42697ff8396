//! CSV serialization of historical price series

use crate::provider::Bar;

const CSV_HEADER: &str = "Date,Open,High,Low,Close,Volume";

/// Serialize a bar series to CSV text, one row per date, date first.
///
/// Rows keep the provider's ordering; values are passed through without
/// rounding.
pub fn to_csv(bars: &[Bar]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for bar in bars {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            bar.timestamp.format("%Y-%m-%d"),
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume,
        ));
    }

    out
}
