//! Best and worst hour selection.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{BestAndWorst, HourBucket, PercentageMapping};

/// Picks the worst and the "best" hour from a percentage mapping.
///
/// Buckets are sorted by value ascending with a stable sort over the
/// mapping's clock order, so equal values resolve to the earliest hour of the
/// day. The order in which shifts first touched a bucket plays no part: a
/// 22:00 shift listed before a 09:00 shift with the same percentage still
/// ranks behind it.
///
/// - Worst is the first bucket, the lowest value.
/// - Best is the first bucket, scanning up from the lowest, whose value is
///   strictly positive. This is the smallest positive percentage, not the
///   largest value.
///
/// # Errors
///
/// - [`EngineError::EmptyPercentages`] if the mapping is empty.
/// - [`EngineError::NoProfitableHour`] if no value is strictly positive.
///
/// # Examples
///
/// ```
/// use labour_engine::calculation::select_best_and_worst;
/// use labour_engine::models::bucket_map;
/// use rust_decimal::Decimal;
///
/// let percentages = bucket_map([
///     ("10:00", Decimal::new(162, 1)),
///     ("13:00", Decimal::new(-24, 0)),
///     ("15:00", Decimal::new(284, 1)),
/// ])
/// .unwrap();
///
/// let ranking = select_best_and_worst(&percentages).unwrap();
/// assert_eq!(ranking.best.to_string(), "10:00");
/// assert_eq!(ranking.worst.to_string(), "13:00");
/// ```
pub fn select_best_and_worst(percentages: &PercentageMapping) -> EngineResult<BestAndWorst> {
    let mut ranked: Vec<(HourBucket, Decimal)> =
        percentages.iter().map(|(b, v)| (*b, *v)).collect();
    // sort_by is stable
    ranked.sort_by(|a, b| a.1.cmp(&b.1));

    let (worst, _) = ranked.first().ok_or(EngineError::EmptyPercentages)?;

    let (best, _) = ranked
        .iter()
        .find(|(_, value)| *value > Decimal::ZERO)
        .ok_or(EngineError::NoProfitableHour)?;

    debug!(best = %best, worst = %worst, "Ranked hours");

    Ok(BestAndWorst {
        best: *best,
        worst: *worst,
    })
}
