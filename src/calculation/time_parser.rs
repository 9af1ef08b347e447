//! Lenient time parsing.
//!
//! Shift sources are typed by hand, so start, end and break times arrive in
//! many shapes ("9", "3pm", "15.30", "09:00"). This module reduces them to a
//! canonical [`TimeOfDay`] or reports that it cannot.

use crate::error::{EngineError, EngineResult};
use crate::models::TimeOfDay;

/// Parses a loosely formatted time string.
///
/// The input is normalized as follows:
/// 1. Every character that is not an ASCII digit or `:` is removed.
/// 2. With no `:` left, the digits are taken as a bare hour (`"3"` → `"3:00"`).
/// 3. A single-digit hour is zero padded (`"3:00"` → `"03:00"`).
/// 4. The result must be exactly `HH:MM` with hour 0-23 and minute 0-59.
///
/// Am/pm markers carry no meaning: `"3pm"` parses as 03:00.
///
/// # Errors
///
/// Returns [`EngineError::TimeParse`] when the normalized text is not a
/// valid `HH:MM` time.
///
/// # Examples
///
/// ```
/// use labour_engine::calculation::parse_time;
///
/// assert_eq!(parse_time("13:00").unwrap().to_string(), "13:00");
/// assert_eq!(parse_time("3pm").unwrap().to_string(), "03:00");
/// assert!(parse_time("14:15pmpmpm123").is_err());
/// ```
pub fn parse_time(raw: &str) -> EngineResult<TimeOfDay> {
    let mut normalized: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ':')
        .collect();

    if !normalized.contains(':') {
        normalized.push_str(":00");
    }

    if has_single_digit_hour(&normalized) {
        normalized.insert(0, '0');
    }

    let fail = || EngineError::TimeParse {
        input: raw.to_string(),
    };

    if !is_strict_time(&normalized) {
        return Err(fail());
    }

    let hour: u32 = normalized[..2].parse().map_err(|_| fail())?;
    let minute: u32 = normalized[3..].parse().map_err(|_| fail())?;

    TimeOfDay::from_hm(hour, minute).ok_or_else(fail)
}

/// Returns true when `text` is exactly two digits, a colon and two digits.
///
/// No normalization and no range check is applied: `"99:99"` passes.
///
/// # Examples
///
/// ```
/// use labour_engine::calculation::is_strict_time;
///
/// assert!(is_strict_time("11:00"));
/// assert!(!is_strict_time("123"));
/// assert!(!is_strict_time("9:00"));
/// ```
pub fn is_strict_time(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit())
}

/// Matches `D:MM`.
fn has_single_digit_hour(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 4
        && bytes[1] == b':'
        && [0, 2, 3].iter().all(|&i| bytes[i].is_ascii_digit())
}
