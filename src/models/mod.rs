//! Core data models for the Labour Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod hourly;
mod shift;
mod time;
mod transaction;

pub use hourly::{
    BestAndWorst, CostMapping, HourlyLine, HourlyReport, PercentageMapping, RevenueMapping,
    bucket_map,
};
pub use shift::{BreakInterval, ShiftRecord, WorkingTime};
pub use time::{HourBucket, TimeOfDay, reference_date};
pub use transaction::TransactionRecord;
