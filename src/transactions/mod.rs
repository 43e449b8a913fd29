//! Transactions — the record, registration rules, ledger and summaries.
//!
//! DESIGN
//! ======
//! Records are stored exactly as the registration screen produced them:
//! the amount stays the string the user typed and is parsed only when a
//! summary needs it. Summaries are pure functions over a slice, so screens
//! load once through `Ledger` and compute as often as they like.

pub mod form;
pub mod ledger;
pub mod summary;

pub use form::{TransactionForm, ValidationError};
pub use ledger::Ledger;
pub use summary::{CategoryTotal, Highlights, Month, MonthlySummary, expenses_by_category};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::StorageError;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// A stored amount is not a finite positive number.
    #[error("transaction {id} has invalid amount '{amount}'")]
    InvalidAmount { id: String, amount: String },

    /// An invalid month was requested.
    #[error("invalid month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("transaction storage failed: {0}")]
    Storage(#[from] StorageError),
}

// =============================================================================
// RECORD
// =============================================================================

/// Income (`positive`) or expense (`negative`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub name: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Numeric amount. The sign lives in `kind`, so the amount itself is
    /// always positive.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::InvalidAmount`] if the stored string is
    /// not a finite number greater than zero.
    pub fn amount_value(&self) -> Result<f64, TransactionError> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .ok_or_else(|| TransactionError::InvalidAmount { id: self.id.clone(), amount: self.amount.clone() })
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
