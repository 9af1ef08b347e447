//! Sales aggregation.
//!
//! Folds sales transactions into revenue per hour bucket. Unlike shift
//! times, transaction times are not reformatted: anything other than strict
//! `HH:MM` fails the aggregation.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{HourBucket, RevenueMapping, TransactionRecord};

use super::parse_decimal;
use super::time_parser::is_strict_time;

/// Sums transaction amounts per hour bucket.
///
/// Each bucket's running total is rounded to two decimals after every
/// addition. An empty input gives an empty mapping.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTransaction`] for the first row whose
/// amount is not a decimal number, whose time is not strict `HH:MM` with an
/// hour of 0-23, or whose amount overflows the hour's total. No partial
/// mapping is returned.
///
/// # Examples
///
/// ```
/// use labour_engine::calculation::aggregate_sales;
/// use labour_engine::models::{HourBucket, TransactionRecord};
/// use rust_decimal::Decimal;
///
/// let sale = |time: &str, amount: &str| TransactionRecord {
///     time: time.to_string(),
///     amount: amount.to_string(),
/// };
/// let revenue = aggregate_sales(&[sale("10:15", "100.25"), sale("10:45", "50.5")]).unwrap();
/// assert_eq!(revenue[&"10:00".parse::<HourBucket>().unwrap()], Decimal::new(15075, 2));
///
/// assert!(aggregate_sales(&[sale("10am", "5")]).is_err());
/// ```
pub fn aggregate_sales(records: &[TransactionRecord]) -> EngineResult<RevenueMapping> {
    let mut revenue = RevenueMapping::new();

    for (index, record) in records.iter().enumerate() {
        let row = index + 1;
        let invalid = |message: String| EngineError::InvalidTransaction { row, message };

        let amount = parse_decimal(&record.amount)
            .ok_or_else(|| invalid(format!("amount '{}' is not a number", record.amount)))?;

        let bucket = strict_bucket(&record.time)
            .ok_or_else(|| invalid(format!("time '{}' is not HH:MM", record.time)))?;

        let total = revenue.entry(bucket).or_insert(Decimal::ZERO);
        let sum = total.checked_add(amount).ok_or_else(|| {
            invalid(format!("amount '{}' overflows the {} total", record.amount, bucket))
        })?;
        *total = sum.round_dp(2);
    }

    debug!(
        rows = records.len(),
        buckets = revenue.len(),
        "Aggregated sales"
    );

    Ok(revenue)
}

/// Buckets a strict `HH:MM` time by its hour.
fn strict_bucket(time: &str) -> Option<HourBucket> {
    if !is_strict_time(time) {
        return None;
    }
    time[..2].parse().ok().and_then(HourBucket::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bucket(s: &str) -> HourBucket {
        s.parse().unwrap()
    }

    fn sale(time: &str, amount: &str) -> TransactionRecord {
        TransactionRecord {
            time: time.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_amounts_summed_per_hour() {
        let revenue = aggregate_sales(&[
            sale("10:15", "100.25"),
            sale("10:45", "50.5"),
            sale("11:00", "30"),
            sale("13:30", "250.5"),
        ])
        .unwrap();

        assert_eq!(revenue.len(), 3);
        assert_eq!(revenue[&bucket("10:00")], dec("150.75"));
        assert_eq!(revenue[&bucket("11:00")], dec("30.0"));
        assert_eq!(revenue[&bucket("13:00")], dec("250.5"));
    }

    #[test]
    fn test_running_total_rounded_to_cents() {
        let revenue = aggregate_sales(&[sale("09:00", "1.234"), sale("09:30", "1.001")]).unwrap();
        // 1.23 + 1.001 = 2.231 -> 2.23
        assert_eq!(revenue[&bucket("09:00")], dec("2.23"));
    }

    #[test]
    fn test_negative_amounts_are_accepted() {
        let revenue = aggregate_sales(&[sale("12:05", "40"), sale("12:10", "-15.5")]).unwrap();
        assert_eq!(revenue[&bucket("12:00")], dec("24.5"));
    }

    #[test]
    fn test_empty_sales_give_empty_mapping() {
        assert!(aggregate_sales(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_amount_fails_everything() {
        let result = aggregate_sales(&[sale("10:00", "12.0"), sale("11:00", "12q")]);
        match result {
            Err(EngineError::InvalidTransaction { row, .. }) => assert_eq!(row, 2),
            other => panic!("Expected InvalidTransaction error, got {:?}", other),
        }
    }

    #[test]
    fn test_scientific_amounts_are_accepted() {
        let revenue = aggregate_sales(&[sale("08:10", "1.5e1")]).unwrap();
        assert_eq!(revenue[&bucket("08:00")], dec("15"));
    }

    #[test]
    fn test_overflowing_total_fails_instead_of_panicking() {
        let max = Decimal::MAX.to_string();
        let result = aggregate_sales(&[sale("10:05", &max), sale("10:40", &max)]);
        match result {
            Err(EngineError::InvalidTransaction { row, .. }) => assert_eq!(row, 2),
            other => panic!("Expected InvalidTransaction error, got {:?}", other),
        }
    }

    #[test]
    fn test_lenient_times_are_not_accepted() {
        for time in ["9:30", "10am", "1030", "10:30pm", "25:00", ""] {
            let result = aggregate_sales(&[sale(time, "10")]);
            assert!(
                matches!(result, Err(EngineError::InvalidTransaction { .. })),
                "expected {:?} to be rejected",
                time
            );
        }
    }
}
