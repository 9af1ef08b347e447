//! CSV source loading.
//!
//! Reads the shift and sales sources into raw records. Expected columns:
//!   shifts: start_time, end_time, break_notes, pay_rate
//!   sales:  time, amount
//!
//! Columns may appear in any order. Values are kept as text; validating them
//! is the job of the calculation stage. Shift fields are trimmed of
//! surrounding whitespace, sales fields are not: a padded sales time is
//! rejected by aggregation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftRecord, TransactionRecord};

/// Load shift records from a CSV reader.
pub fn load_shift_records<R: Read>(reader: R) -> EngineResult<Vec<ShiftRecord>> {
    load_records(reader, "<shift reader>", csv::Trim::All)
}

/// Load shift records from a CSV file path.
///
/// The file is closed before this function returns, on success or failure.
pub fn load_shift_records_file<P: AsRef<Path>>(path: P) -> EngineResult<Vec<ShiftRecord>> {
    load_file(path.as_ref(), csv::Trim::All)
}

/// Load sales transactions from a CSV reader.
///
/// Only the header row is trimmed.
pub fn load_transactions<R: Read>(reader: R) -> EngineResult<Vec<TransactionRecord>> {
    load_records(reader, "<sales reader>", csv::Trim::Headers)
}

/// Load sales transactions from a CSV file path.
pub fn load_transactions_file<P: AsRef<Path>>(path: P) -> EngineResult<Vec<TransactionRecord>> {
    load_file(path.as_ref(), csv::Trim::Headers)
}

fn load_file<T: DeserializeOwned>(path: &Path, trim: csv::Trim) -> EngineResult<Vec<T>> {
    let path_str = path.display().to_string();

    let file = File::open(path).map_err(|_| EngineError::SourceNotFound {
        path: path_str.clone(),
    })?;

    let records = load_records(file, &path_str, trim)?;
    debug!(path = %path_str, rows = records.len(), "Loaded source");
    Ok(records)
}

fn load_records<R: Read, T: DeserializeOwned>(
    reader: R,
    origin: &str,
    trim: csv::Trim,
) -> EngineResult<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(trim)
        .from_reader(reader);

    let mut records = Vec::new();
    for (line_num, result) in csv_reader.deserialize().enumerate() {
        let record: T = result.map_err(|e| EngineError::SourceParse {
            path: origin.to_string(),
            message: format!("line {}: {}", line_num + 2, e),
        })?;
        records.push(record);
    }

    Ok(records)
}
