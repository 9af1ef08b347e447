//! Shift model and related types.
//!
//! This module defines the raw [`ShiftRecord`] read from the shift source and
//! the parsed [`WorkingTime`] and [`BreakInterval`] derived from it.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// One row of the shift source, kept as the operator typed it.
///
/// Every field is text so that a malformed value rejects the shift during
/// allocation instead of failing the whole CSV read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Free-text shift start time (e.g. "09:00", "9am").
    pub start_time: String,
    /// Free-text shift end time.
    pub end_time: String,
    /// Free-text break description (e.g. "12-1pm", "15.30 - 16.00").
    pub break_notes: String,
    /// Hourly pay rate.
    pub pay_rate: String,
}

/// The parsed start and end of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingTime {
    /// The start of the shift, anchored on the reference day.
    pub start_time: NaiveDateTime,
    /// The end of the shift, anchored on the reference day.
    pub end_time: NaiveDateTime,
}

impl WorkingTime {
    /// Returns `end - start`. Negative when the end precedes the start.
    ///
    /// # Examples
    ///
    /// ```
    /// use labour_engine::models::{TimeOfDay, WorkingTime};
    /// use chrono::TimeDelta;
    ///
    /// let shift = WorkingTime {
    ///     start_time: TimeOfDay::from_hm(9, 0).unwrap().on_reference_day(),
    ///     end_time: TimeOfDay::from_hm(15, 0).unwrap().on_reference_day(),
    /// };
    /// assert_eq!(shift.duration(), TimeDelta::hours(6));
    /// ```
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}

/// A break taken during a shift.
///
/// Either end may fall on the day after the reference day once the
/// twelve-hour am/pm correction has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakInterval {
    /// The start of the break.
    pub start_time: NaiveDateTime,
    /// The end of the break.
    pub end_time: NaiveDateTime,
}

impl BreakInterval {
    /// Returns `end - start`. Negative when the end precedes the start.
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeOfDay;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        TimeOfDay::from_hm(hour, minute).unwrap().on_reference_day()
    }

    #[test]
    fn test_working_time_duration() {
        let shift = WorkingTime {
            start_time: at(9, 0),
            end_time: at(17, 30),
        };
        assert_eq!(shift.duration(), TimeDelta::minutes(510));
    }

    #[test]
    fn test_working_time_negative_duration() {
        let shift = WorkingTime {
            start_time: at(22, 0),
            end_time: at(6, 0),
        };
        assert_eq!(shift.duration(), TimeDelta::hours(-16));
    }

    #[test]
    fn test_break_duration() {
        let lunch = BreakInterval {
            start_time: at(12, 0),
            end_time: at(12, 45),
        };
        assert_eq!(lunch.duration(), TimeDelta::minutes(45));
    }

    #[test]
    fn test_shift_record_deserialization() {
        let json = r#"{
            "start_time": "10:00",
            "end_time": "23:00",
            "break_notes": "15-18",
            "pay_rate": "10.0"
        }"#;

        let record: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.break_notes, "15-18");
        assert_eq!(record.pay_rate, "10.0");
    }
}
