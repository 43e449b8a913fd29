//! Per-user transaction list in the session store.

use tracing::info;

use super::{Transaction, TransactionError};
use crate::storage::{self, SessionStore, transactions_key};

/// Read/append access to one user's transactions.
pub struct Ledger;

impl Ledger {
    /// All transactions recorded for `user_id`, oldest first. A missing
    /// key is an empty ledger.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::Storage`] if the list cannot be read or decoded.
    pub async fn load<S>(store: &S, user_id: &str) -> Result<Vec<Transaction>, TransactionError>
    where
        S: SessionStore + ?Sized,
    {
        Ok(storage::get_json(store, &transactions_key(user_id)).await?.unwrap_or_default())
    }

    /// Append `transaction` and write the whole list back.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::Storage`] if the read or the write fails;
    /// the stored list is unchanged in that case.
    pub async fn append<S>(store: &S, user_id: &str, transaction: Transaction) -> Result<usize, TransactionError>
    where
        S: SessionStore + ?Sized,
    {
        let mut transactions = Self::load(store, user_id).await?;
        let id = transaction.id.clone();
        transactions.push(transaction);
        storage::set_json(store, &transactions_key(user_id), &transactions).await?;
        info!(transaction_id = %id, count = transactions.len(), "transaction recorded");
        Ok(transactions.len())
    }
}

#[cfg(test)]
#[path = "ledger_test.rs"]
mod tests;
