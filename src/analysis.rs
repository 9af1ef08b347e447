//! End-to-end hourly labour analysis.
//!
//! Wires the sources and calculation stages together:
//! shift CSV → cost per hour, sales CSV → revenue per hour, then
//! percentages and ranking.

use std::path::Path;

use tracing::info;

use crate::calculation::{
    aggregate_sales, compute_percentages, process_shifts, select_best_and_worst,
};
use crate::config::AnalysisConfig;
use crate::error::EngineResult;
use crate::input::{load_shift_records_file, load_transactions_file};
use crate::models::{BestAndWorst, HourlyReport};

/// Runs the full analysis over a shift source and a sales source.
///
/// # Errors
///
/// Fails if either source cannot be read, any transaction is malformed, any
/// cost or matching revenue bucket is zero, or ranking finds no positive
/// percentage. Rejected shift rows are handled per
/// [`AnalysisConfig::shift_row_policy`] and do not fail the run.
///
/// # Example
///
/// ```no_run
/// use labour_engine::analysis::analyze;
/// use labour_engine::config::AnalysisConfig;
///
/// let report = analyze("work_shifts.csv", "transactions.csv", &AnalysisConfig::default())?;
/// println!("Best hour: {}", report.best_hour);
/// # Ok::<(), labour_engine::error::EngineError>(())
/// ```
pub fn analyze<P: AsRef<Path>, Q: AsRef<Path>>(
    shifts_path: P,
    sales_path: Q,
    config: &AnalysisConfig,
) -> EngineResult<HourlyReport> {
    let shift_records = load_shift_records_file(shifts_path)?;
    let transactions = load_transactions_file(sales_path)?;

    let costs = process_shifts(&shift_records, config.shift_row_policy);
    let revenue = aggregate_sales(&transactions)?;
    let percentages = compute_percentages(&costs, &revenue)?;
    let ranking = select_best_and_worst(&percentages)?;

    info!(
        shifts = shift_records.len(),
        transactions = transactions.len(),
        buckets = percentages.len(),
        best = %ranking.best,
        worst = %ranking.worst,
        "Analysis complete"
    );

    Ok(HourlyReport::new(ranking, &costs, &revenue, &percentages))
}

/// Returns the best and worst hours using the default configuration.
///
/// # Example
///
/// ```no_run
/// use labour_engine::analysis::best_and_worst_hours;
///
/// let hours = best_and_worst_hours("work_shifts.csv", "transactions.csv")?;
/// println!("{} / {}", hours.best, hours.worst);
/// # Ok::<(), labour_engine::error::EngineError>(())
/// ```
pub fn best_and_worst_hours<P: AsRef<Path>, Q: AsRef<Path>>(
    shifts_path: P,
    sales_path: Q,
) -> EngineResult<BestAndWorst> {
    analyze(shifts_path, sales_path, &AnalysisConfig::default()).map(|r| r.best_and_worst())
}
