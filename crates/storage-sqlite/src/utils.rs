//! Conversion helpers shared by the storage models.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a stored string into a Decimal, with a fallback for scientific
/// notation by parsing as f64 first.
pub(crate) fn parse_decimal(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str) {
            Ok(f_val) => match Decimal::from_f64(f_val) {
                Some(dec_val) => dec_val,
                None => {
                    log::error!(
                        "Failed to convert {} '{}' (parsed as f64: {}) to Decimal.",
                        field_name,
                        value_str,
                        f_val
                    );
                    Decimal::ZERO
                }
            },
            Err(e_f64) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as f64 (err: {}). Falling back to ZERO.",
                    field_name,
                    value_str,
                    e_decimal,
                    e_f64
                );
                Decimal::ZERO
            }
        },
    }
}

/// Formats a timestamp for storage.
///
/// Fixed-width UTC RFC3339 so that stored values sort lexicographically in
/// date order.
pub(crate) fn format_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses a stored timestamp, falling back to the epoch on malformed input.
pub(crate) fn parse_datetime(value_str: &str, field_name: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(value_str) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            log::error!("Failed to parse {} '{}': {}", field_name, value_str, e);
            DateTime::<Utc>::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_decimal_plain() {
        assert_eq!(parse_decimal("1150.25", "cash"), dec!(1150.25));
    }

    #[test]
    fn test_parse_decimal_scientific_notation() {
        assert_eq!(parse_decimal("1e2", "cash"), dec!(100));
    }

    #[test]
    fn test_datetime_round_trip() {
        // Storage precision is microseconds.
        let now = Utc::now();
        let parsed = parse_datetime(&format_datetime(&now), "entry_date");
        assert_eq!(parsed.timestamp_micros(), now.timestamp_micros());
    }
}
