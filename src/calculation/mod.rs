//! Calculation logic for the Labour Engine.
//!
//! This module contains every stage of the hourly analysis: lenient time
//! parsing, shift cost allocation across hour buckets, sales aggregation,
//! labour percentage calculation, and best/worst hour ranking.

mod percentage;
mod ranking;
mod sales_aggregation;
mod shift_allocation;
mod time_parser;

pub use percentage::compute_percentages;
pub use ranking::select_best_and_worst;
pub use sales_aggregation::aggregate_sales;
pub use shift_allocation::{
    accumulate_costs, allocate_shift, process_break_time, process_shifts, process_working_time,
};
pub use time_parser::{is_strict_time, parse_time};

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a decimal in plain (`12.5`) or scientific (`1.25e1`) notation,
/// ignoring surrounding whitespace.
fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_plain_and_scientific() {
        assert_eq!(parse_decimal("12.5"), Some(Decimal::new(125, 1)));
        assert_eq!(parse_decimal(" 10 "), Some(Decimal::TEN));
        assert_eq!(parse_decimal("1e1"), Some(Decimal::TEN));
        assert_eq!(parse_decimal("1.25e1"), Some(Decimal::new(125, 1)));
        assert_eq!(parse_decimal("ten"), None);
        assert_eq!(parse_decimal(""), None);
    }
}
