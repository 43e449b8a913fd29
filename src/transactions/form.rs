//! Registration form validation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{Transaction, TransactionKind};
use crate::categories;

/// Raw registration input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub name: String,
    pub amount: String,
    pub kind: Option<TransactionKind>,
    /// Selected category key; `None` or the `category` placeholder until one is picked.
    pub category: Option<String>,
}

/// A registration rule the form broke. Display text is user-facing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Nome é obrigatório")]
    NameRequired,
    #[error("O valor é obrigatório")]
    AmountRequired,
    #[error("Informe um valor numérico")]
    AmountNotNumeric,
    #[error("O valor não pode ser negativo")]
    AmountNotPositive,
    #[error("Selecione o tipo da transação")]
    KindRequired,
    #[error("Selecione a categoria")]
    CategoryRequired,
}

impl TransactionForm {
    /// Check every rule and build the record dated `now`.
    ///
    /// Field rules run before selection rules, in form order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<Transaction, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }

        let amount = self.amount.trim();
        if amount.is_empty() {
            return Err(ValidationError::AmountRequired);
        }
        let value = amount
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(ValidationError::AmountNotNumeric)?;
        if value <= 0.0 {
            return Err(ValidationError::AmountNotPositive);
        }

        let kind = self.kind.ok_or(ValidationError::KindRequired)?;
        let category = self
            .category
            .as_deref()
            .filter(|c| categories::find(c).is_some())
            .ok_or(ValidationError::CategoryRequired)?;

        Ok(Transaction {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            amount: amount.to_owned(),
            kind,
            category: category.to_owned(),
            date: now,
        })
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
