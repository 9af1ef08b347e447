//! Time-of-day and hour bucket models.
//!
//! This module defines [`TimeOfDay`], a wall-clock time with no date, and
//! [`HourBucket`], the `HH:00` key used by every hourly mapping.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// Represents a wall-clock time with hour and minute precision.
///
/// The canonical text form is `HH:MM`, always zero padded.
///
/// # Example
///
/// ```
/// use labour_engine::models::TimeOfDay;
///
/// let time = TimeOfDay::from_hm(9, 5).unwrap();
/// assert_eq!(time.to_string(), "09:05");
/// assert_eq!(time.bucket().to_string(), "09:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Creates a time from an hour (0-23) and minute (0-59).
    ///
    /// Returns `None` when either component is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Returns the hour component.
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the hour bucket this time falls into.
    pub fn bucket(&self) -> HourBucket {
        HourBucket::of(self.0)
    }

    /// Anchors this time on the reference day.
    ///
    /// Shift arithmetic happens on anchored datetimes so that a time pushed
    /// past midnight (e.g. a break shifted by twelve hours) still compares
    /// as later than the shift start.
    pub fn on_reference_day(&self) -> NaiveDateTime {
        reference_date().and_time(self.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// The day every parsed time is anchored on.
pub fn reference_date() -> NaiveDate {
    NaiveDate::default()
}

/// Represents one clock hour, displayed as `HH:00`.
///
/// Hour buckets are the unit of aggregation for labour cost, revenue and
/// percentages. Parsing from text only accepts the exact `HH:00` form.
///
/// # Example
///
/// ```
/// use labour_engine::models::HourBucket;
///
/// let bucket: HourBucket = "14:00".parse().unwrap();
/// assert_eq!(bucket.hour(), 14);
/// assert!("1400".parse::<HourBucket>().is_err());
/// assert!("14:30".parse::<HourBucket>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourBucket(u8);

impl HourBucket {
    /// Creates a bucket for the given clock hour, or `None` if it is not 0-23.
    pub fn new(hour: u32) -> Option<Self> {
        u8::try_from(hour).ok().filter(|h| *h < 24).map(Self)
    }

    /// Returns the bucket containing the given time.
    pub fn of(time: NaiveTime) -> Self {
        // NaiveTime::hour is always within 0..24
        Self(time.hour() as u8)
    }

    /// Returns the clock hour of this bucket.
    pub fn hour(&self) -> u32 {
        u32::from(self.0)
    }

    /// Returns the `HH:00` boundary that opens this bucket.
    pub fn boundary(&self) -> NaiveTime {
        NaiveTime::default() + TimeDelta::hours(i64::from(self.0))
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl FromStr for HourBucket {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidBucket { key: s.to_string() };

        let bytes = s.as_bytes();
        if bytes.len() != 5
            || &bytes[2..] != b":00"
            || !bytes[..2].iter().all(u8::is_ascii_digit)
        {
            return Err(invalid());
        }

        let hour: u32 = s[..2].parse().map_err(|_| invalid())?;
        Self::new(hour).ok_or_else(invalid)
    }
}

impl Serialize for HourBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_display_is_zero_padded() {
        assert_eq!(TimeOfDay::from_hm(3, 0).unwrap().to_string(), "03:00");
        assert_eq!(TimeOfDay::from_hm(23, 59).unwrap().to_string(), "23:59");
    }

    #[test]
    fn test_time_of_day_rejects_out_of_range() {
        assert!(TimeOfDay::from_hm(24, 0).is_none());
        assert!(TimeOfDay::from_hm(12, 60).is_none());
    }

    #[test]
    fn test_time_of_day_bucket_truncates_minutes() {
        let time = TimeOfDay::from_hm(13, 45).unwrap();
        assert_eq!(time.bucket(), HourBucket::new(13).unwrap());
    }

    #[test]
    fn test_anchored_times_keep_order() {
        let early = TimeOfDay::from_hm(9, 0).unwrap().on_reference_day();
        let late = TimeOfDay::from_hm(17, 30).unwrap().on_reference_day();
        assert!(early < late);
        assert_eq!(early.date(), late.date());
    }

    #[test]
    fn test_bucket_parses_canonical_form() {
        let bucket: HourBucket = "00:00".parse().unwrap();
        assert_eq!(bucket.hour(), 0);
        let bucket: HourBucket = "23:00".parse().unwrap();
        assert_eq!(bucket.hour(), 23);
    }

    #[test]
    fn test_bucket_rejects_malformed_keys() {
        for key in ["1000", "10:30", "24:00", "9:00", "ab:00", "", "10:00 ", "1:000"] {
            let result = key.parse::<HourBucket>();
            assert!(
                matches!(result, Err(EngineError::InvalidBucket { .. })),
                "expected {:?} to be rejected",
                key
            );
        }
    }

    #[test]
    fn test_bucket_boundary() {
        let bucket = HourBucket::new(18).unwrap();
        assert_eq!(bucket.boundary(), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }

    #[test]
    fn test_bucket_serializes_as_text() {
        let bucket = HourBucket::new(7).unwrap();
        assert_eq!(serde_json::to_string(&bucket).unwrap(), "\"07:00\"");
    }
}
