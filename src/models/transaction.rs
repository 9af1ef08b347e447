//! Sales transaction model.

use serde::{Deserialize, Serialize};

/// One row of the sales source.
///
/// `time` must already be in strict `HH:MM` form; `amount` must parse as a
/// decimal number. Both are validated during aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Time of the sale, `HH:MM`.
    pub time: String,
    /// Sale amount.
    pub amount: String,
}
