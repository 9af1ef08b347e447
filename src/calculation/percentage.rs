//! Labour percentage calculation.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{CostMapping, PercentageMapping, RevenueMapping};

/// Computes labour cost as a percentage of revenue for every cost bucket.
///
/// Buckets that only appear in `revenue` are ignored. A bucket with labour
/// cost but no revenue entry reports the negated cost instead of a
/// percentage. Otherwise the value is `cost / revenue × 100`, rounded to two
/// decimals.
///
/// # Errors
///
/// - [`EngineError::ZeroCost`] if any cost bucket holds zero.
/// - [`EngineError::ZeroRevenue`] if a matching revenue bucket holds zero.
/// - [`EngineError::PercentageOverflow`] if a percentage does not fit in a
///   decimal.
///
/// Any error aborts the whole computation.
///
/// # Examples
///
/// ```
/// use labour_engine::calculation::compute_percentages;
/// use labour_engine::models::{HourBucket, bucket_map};
/// use rust_decimal::Decimal;
///
/// let costs = bucket_map([("11:00", Decimal::new(25, 0))]).unwrap();
/// let revenue = bucket_map([("10:00", Decimal::new(500, 0))]).unwrap();
///
/// let percentages = compute_percentages(&costs, &revenue).unwrap();
/// assert_eq!(percentages[&"11:00".parse::<HourBucket>().unwrap()], Decimal::new(-25, 0));
/// ```
pub fn compute_percentages(
    costs: &CostMapping,
    revenue: &RevenueMapping,
) -> EngineResult<PercentageMapping> {
    let hundred = Decimal::ONE_HUNDRED;

    let percentages = costs
        .iter()
        .map(|(bucket, cost)| {
            if cost.is_zero() {
                return Err(EngineError::ZeroCost { bucket: *bucket });
            }

            let value = match revenue.get(bucket) {
                None => -*cost,
                Some(sales) if sales.is_zero() => {
                    return Err(EngineError::ZeroRevenue { bucket: *bucket });
                }
                Some(sales) => cost
                    .checked_div(*sales)
                    .and_then(|ratio| ratio.checked_mul(hundred))
                    .ok_or(EngineError::PercentageOverflow { bucket: *bucket })?
                    .round_dp(2),
            };

            Ok((*bucket, value))
        })
        .collect::<EngineResult<PercentageMapping>>()?;

    debug!(buckets = percentages.len(), "Computed labour percentages");
    Ok(percentages)
}
