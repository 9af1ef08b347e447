//! Shift cost allocation.
//!
//! This module spreads each shift's pay across the clock hours it touches,
//! pro-rating partial hours and unpaid break minutes, and folds every shift
//! into a single [`CostMapping`].

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::ShiftRowPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    BreakInterval, CostMapping, HourBucket, ShiftRecord, WorkingTime, reference_date,
};

use super::parse_decimal;
use super::time_parser::parse_time;

const MINUTES_PER_HOUR: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;

/// Parses a shift's start and end times.
///
/// The duration is not validated: an end before the start gives a negative
/// duration, which later allocates nothing.
///
/// # Errors
///
/// Returns [`EngineError::TimeParse`] if either time cannot be parsed.
///
/// # Examples
///
/// ```
/// use labour_engine::calculation::process_working_time;
/// use chrono::TimeDelta;
///
/// let shift = process_working_time("09:00", "15:00").unwrap();
/// assert_eq!(shift.duration(), TimeDelta::hours(6));
/// assert!(process_working_time("abcd", "15:00").is_err());
/// ```
pub fn process_working_time(start: &str, end: &str) -> EngineResult<WorkingTime> {
    let start_time = parse_time(start)?.on_reference_day();
    let end_time = parse_time(end)?.on_reference_day();

    Ok(WorkingTime {
        start_time,
        end_time,
    })
}

/// Parses free-text break notes against the shift start.
///
/// Notes look like `"12-13pm"`, `"4PM-5PM"` or `"18.30 - 19.00"`: spaces are
/// dropped, `.` becomes `:`, and the text is split on `-` into a start and
/// end fragment. Each endpoint that falls before the shift start is assumed
/// to be missing its pm marker and is moved twelve hours later, once.
///
/// # Errors
///
/// Returns [`EngineError::InvalidBreak`] if the notes have no `-`, either
/// fragment fails to parse, or an endpoint still precedes the shift start
/// after the twelve-hour correction.
///
/// # Examples
///
/// ```
/// use labour_engine::calculation::process_break_time;
/// use labour_engine::models::TimeOfDay;
/// use chrono::TimeDelta;
///
/// let start = TimeOfDay::from_hm(10, 0).unwrap().on_reference_day();
/// let lunch = process_break_time("12-13pm", start).unwrap();
/// assert_eq!(lunch.duration(), TimeDelta::hours(1));
///
/// let late_start = TimeOfDay::from_hm(17, 0).unwrap().on_reference_day();
/// assert!(process_break_time("1pm-2pm", late_start).is_err());
/// ```
pub fn process_break_time(
    notes: &str,
    shift_start: NaiveDateTime,
) -> EngineResult<BreakInterval> {
    let invalid = |message: String| EngineError::InvalidBreak {
        notes: notes.to_string(),
        message,
    };

    if !notes.contains('-') {
        return Err(invalid("no '-' between break start and end".to_string()));
    }

    let normalized = notes.replace(' ', "").replace('.', ":");
    let mut fragments = normalized.split('-');
    let start_raw = fragments.next().unwrap_or_default();
    let end_raw = fragments.next().unwrap_or_default();

    let start_time = parse_time(start_raw).map_err(|e| invalid(e.to_string()))?;
    let end_time = parse_time(end_raw).map_err(|e| invalid(e.to_string()))?;

    let start_time = align_to_shift(start_time.on_reference_day(), shift_start)
        .ok_or_else(|| invalid("break starts before the shift".to_string()))?;
    let end_time = align_to_shift(end_time.on_reference_day(), shift_start)
        .ok_or_else(|| invalid("break ends before the shift".to_string()))?;

    Ok(BreakInterval {
        start_time,
        end_time,
    })
}

/// Moves a break endpoint typed without pm forward twelve hours.
fn align_to_shift(moment: NaiveDateTime, shift_start: NaiveDateTime) -> Option<NaiveDateTime> {
    if moment >= shift_start {
        return Some(moment);
    }

    let shifted = moment + TimeDelta::hours(12);
    (shifted >= shift_start).then_some(shifted)
}

/// Parses an hourly pay rate, which must be a non-negative decimal in plain
/// or scientific notation.
fn parse_pay_rate(raw: &str) -> EngineResult<Decimal> {
    parse_decimal(raw)
        .filter(|rate| !rate.is_sign_negative())
        .ok_or_else(|| EngineError::InvalidPayRate {
            value: raw.to_string(),
        })
}

/// Counts unpaid break minutes per hour bucket.
///
/// A negative break duration counts nothing.
fn break_minutes_by_bucket(break_interval: &BreakInterval) -> BTreeMap<HourBucket, i64> {
    let mut taken = BTreeMap::new();

    for minute in 0..break_interval.duration().num_minutes().max(0) {
        let moment = break_interval.start_time + TimeDelta::minutes(minute);
        *taken.entry(HourBucket::of(moment.time())).or_insert(0) += 1;
    }

    taken
}

/// Absolute distance between two moments in fractional hours.
fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> Decimal {
    Decimal::from((to - from).num_seconds().abs()) / Decimal::from(SECONDS_PER_HOUR)
}

/// Allocates one shift's pay across hour buckets.
///
/// The shift is walked in 60-minute steps from its start while the offset is
/// below `duration + 60` minutes, so the bucket after the last full hour is
/// always visited. For each visited bucket the paid fraction of the hour is:
///
/// - `1`, by default;
/// - `1 - break_minutes / 60`, when break minutes fall in the bucket;
/// - `(start - boundary)` in hours rounded to two decimals, when the bucket
///   boundary is earlier than the shift start;
/// - `(end - boundary)` in hours, when the bucket is the end hour and the end
///   is strictly after the boundary.
///
/// Later rules override earlier ones. `pay_rate × fraction` is added to the
/// bucket and the running total is rounded to two decimals.
///
/// Bucket boundaries wrap at midnight like a wall clock.
///
/// # Errors
///
/// Returns the first failure among the shift times, the break notes and the
/// pay rate, or [`EngineError::CostOverflow`] if a bucket's cost does not fit
/// in a decimal.
///
/// # Examples
///
/// ```
/// use labour_engine::calculation::allocate_shift;
/// use labour_engine::models::{HourBucket, ShiftRecord};
/// use rust_decimal::Decimal;
///
/// let record = ShiftRecord {
///     start_time: "10:30".to_string(),
///     end_time: "16:00".to_string(),
///     break_notes: "4pm-5pm".to_string(),
///     pay_rate: "10.0".to_string(),
/// };
/// let costs = allocate_shift(&record).unwrap();
///
/// assert_eq!(costs[&"10:00".parse::<HourBucket>().unwrap()], Decimal::new(5, 0));
/// assert_eq!(costs[&"16:00".parse::<HourBucket>().unwrap()], Decimal::ZERO);
/// ```
pub fn allocate_shift(record: &ShiftRecord) -> EngineResult<CostMapping> {
    let working = process_working_time(&record.start_time, &record.end_time)?;
    let break_interval = process_break_time(&record.break_notes, working.start_time)?;
    let pay_rate = parse_pay_rate(&record.pay_rate)?;

    let break_minutes = break_minutes_by_bucket(&break_interval);
    let duration = working.duration().num_minutes();
    let mut costs = CostMapping::new();

    if duration < 0 {
        debug!(
            start = %working.start_time.time(),
            end = %working.end_time.time(),
            "Shift ends before it starts, nothing allocated"
        );
        return Ok(costs);
    }

    for offset in (0..duration + MINUTES_PER_HOUR).step_by(MINUTES_PER_HOUR as usize) {
        let bucket = HourBucket::of((working.start_time + TimeDelta::minutes(offset)).time());
        let boundary = reference_date().and_time(bucket.boundary());

        let mut multiplier = Decimal::ONE;

        if let Some(minutes) = break_minutes.get(&bucket) {
            multiplier = Decimal::ONE - Decimal::from(*minutes) / Decimal::from(MINUTES_PER_HOUR);
        }

        if boundary < working.start_time {
            multiplier = hours_between(boundary, working.start_time).round_dp(2);
        }

        if bucket.hour() == working.end_time.hour() && working.end_time > boundary {
            multiplier = hours_between(boundary, working.end_time);
        }

        let total = costs.entry(bucket).or_insert(Decimal::ZERO);
        *total = pay_rate
            .checked_mul(multiplier)
            .and_then(|cost| total.checked_add(cost))
            .ok_or(EngineError::CostOverflow { bucket })?
            .round_dp(2);
    }

    debug!(
        start = %working.start_time.time(),
        end = %working.end_time.time(),
        buckets = costs.len(),
        "Allocated shift"
    );

    Ok(costs)
}

/// Adds one shift's costs into the running total, rounding each bucket.
///
/// # Errors
///
/// Returns [`EngineError::CostOverflow`] if any bucket's sum does not fit in
/// a decimal. `total` is left untouched in that case.
pub fn accumulate_costs(total: &mut CostMapping, shift_costs: CostMapping) -> EngineResult<()> {
    let merged = shift_costs
        .into_iter()
        .map(|(bucket, cost)| {
            let current = total.get(&bucket).copied().unwrap_or(Decimal::ZERO);
            current
                .checked_add(cost)
                .map(|sum| (bucket, sum.round_dp(2)))
                .ok_or(EngineError::CostOverflow { bucket })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    total.extend(merged);
    Ok(())
}

/// Allocates every shift row and sums the costs per bucket.
///
/// With [`ShiftRowPolicy::Stop`] the first rejected row ends processing and
/// the costs of the rows before it are returned. With
/// [`ShiftRowPolicy::Skip`] rejected rows are logged and skipped. A row whose
/// costs would overflow the running total is rejected like any other.
///
/// # Examples
///
/// ```
/// use labour_engine::calculation::process_shifts;
/// use labour_engine::config::ShiftRowPolicy;
/// use labour_engine::models::ShiftRecord;
///
/// let row = |start: &str, notes: &str| ShiftRecord {
///     start_time: start.to_string(),
///     end_time: "14:00".to_string(),
///     break_notes: notes.to_string(),
///     pay_rate: "10.0".to_string(),
/// };
/// let rows = vec![row("nonsense", "12-13"), row("09:00", "12-13")];
///
/// assert!(process_shifts(&rows, ShiftRowPolicy::Stop).is_empty());
/// assert!(!process_shifts(&rows, ShiftRowPolicy::Skip).is_empty());
/// ```
pub fn process_shifts(records: &[ShiftRecord], policy: ShiftRowPolicy) -> CostMapping {
    let mut costs = CostMapping::new();

    for (index, record) in records.iter().enumerate() {
        let row = index + 1;

        let allocated = allocate_shift(record)
            .and_then(|shift_costs| accumulate_costs(&mut costs, shift_costs));

        if let Err(e) = allocated {
            let error = EngineError::InvalidShift {
                row,
                message: e.to_string(),
            };
            match policy {
                ShiftRowPolicy::Stop => {
                    warn!(row, error = %error, "Rejected shift row, stopping");
                    break;
                }
                ShiftRowPolicy::Skip => {
                    warn!(row, error = %error, "Rejected shift row, skipping");
                }
            }
        }
    }

    debug!(rows = records.len(), buckets = costs.len(), "Processed shifts");
    costs
}
