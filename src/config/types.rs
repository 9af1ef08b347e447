//! Configuration types for hourly labour analysis.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

/// What to do when a shift row cannot be allocated.
///
/// # Example
///
/// ```
/// use labour_engine::config::ShiftRowPolicy;
///
/// assert_eq!(ShiftRowPolicy::default(), ShiftRowPolicy::Stop);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftRowPolicy {
    /// Stop reading shifts at the first rejected row, keeping earlier rows.
    #[default]
    Stop,
    /// Log the rejected row and carry on with the next one.
    Skip,
}

/// Settings for an analysis run.
///
/// Every field has a default, so an empty YAML document is a valid
/// configuration.
///
/// ```yaml
/// shift_row_policy: skip
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Handling of rejected shift rows.
    pub shift_row_policy: ShiftRowPolicy,
}
