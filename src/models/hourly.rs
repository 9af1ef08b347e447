//! Hourly mappings and analysis result models.
//!
//! Every stage of the pipeline produces an ordered map keyed by
//! [`HourBucket`]. The final stage produces [`BestAndWorst`], and the
//! pipeline wraps everything in an [`HourlyReport`].

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::EngineResult;

use super::HourBucket;

/// Labour cost per hour bucket.
pub type CostMapping = BTreeMap<HourBucket, Decimal>;

/// Revenue per hour bucket, rounded to two decimals.
pub type RevenueMapping = BTreeMap<HourBucket, Decimal>;

/// Labour cost as a percentage of revenue per hour bucket.
///
/// Negative values are buckets with labour cost but no revenue; the value is
/// the negated cost.
pub type PercentageMapping = BTreeMap<HourBucket, Decimal>;

/// Builds an hourly mapping from text keys, validating each key as `HH:00`.
///
/// Later duplicates overwrite earlier ones.
///
/// # Example
///
/// ```
/// use labour_engine::models::bucket_map;
/// use rust_decimal::Decimal;
///
/// let costs = bucket_map([("11:00", Decimal::new(25, 0))]).unwrap();
/// assert_eq!(costs.len(), 1);
/// assert!(bucket_map([("1100", Decimal::ONE)]).is_err());
/// ```
pub fn bucket_map<K, I>(pairs: I) -> EngineResult<BTreeMap<HourBucket, Decimal>>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, Decimal)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| Ok((key.as_ref().parse::<HourBucket>()?, value)))
        .collect()
}

/// The hour buckets picked by ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BestAndWorst {
    /// The first bucket, in ascending percentage order, with a positive value.
    pub best: HourBucket,
    /// The bucket with the lowest percentage.
    pub worst: HourBucket,
}

/// One line of the hourly report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyLine {
    /// The hour bucket.
    pub bucket: HourBucket,
    /// Total labour cost allocated to the bucket.
    pub labour_cost: Decimal,
    /// Revenue recorded in the bucket, if any.
    pub revenue: Option<Decimal>,
    /// Labour percentage of revenue, or the negated cost with no revenue.
    pub percentage: Decimal,
}

/// The full result of an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyReport {
    /// The chosen best hour.
    pub best_hour: HourBucket,
    /// The chosen worst hour.
    pub worst_hour: HourBucket,
    /// One line per bucket with labour cost, in clock order.
    pub hours: Vec<HourlyLine>,
}

impl HourlyReport {
    /// Assembles a report from the pipeline's intermediate mappings.
    ///
    /// Lines are produced for every bucket in `percentages`; buckets without
    /// a cost entry report a zero cost.
    pub fn new(
        ranking: BestAndWorst,
        costs: &CostMapping,
        revenue: &RevenueMapping,
        percentages: &PercentageMapping,
    ) -> Self {
        let hours = percentages
            .iter()
            .map(|(bucket, percentage)| HourlyLine {
                bucket: *bucket,
                labour_cost: costs.get(bucket).copied().unwrap_or(Decimal::ZERO),
                revenue: revenue.get(bucket).copied(),
                percentage: *percentage,
            })
            .collect();

        Self {
            best_hour: ranking.best,
            worst_hour: ranking.worst,
            hours,
        }
    }

    /// Returns the ranking carried by this report.
    pub fn best_and_worst(&self) -> BestAndWorst {
        BestAndWorst {
            best: self.best_hour,
            worst: self.worst_hour,
        }
    }
}
