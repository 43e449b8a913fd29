//! Dashboard highlights and monthly category breakdown.
//!
//! Everything here is a pure function of the transaction slice. Months are
//! calendar months in UTC.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use super::{Transaction, TransactionError, TransactionKind};
use crate::categories::Category;

// =============================================================================
// MONTH
// =============================================================================

/// A calendar month, `month` in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// # Errors
    ///
    /// Returns [`TransactionError::InvalidMonth`] unless `month` is in `1..=12`
    /// and `year` is within the range of representable dates.
    pub fn new(year: i32, month: u32) -> Result<Self, TransactionError> {
        let years = NaiveDate::MIN.year()..=NaiveDate::MAX.year();
        if (1..=12).contains(&month) && years.contains(&year) {
            Ok(Self { year, month })
        } else {
            Err(TransactionError::InvalidMonth { year, month })
        }
    }

    /// The month `date` falls in.
    #[must_use]
    pub fn of(date: &DateTime<Utc>) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.month
    }

    #[must_use]
    pub fn next(self) -> Self {
        if self.month == 12 { Self { year: self.year + 1, month: 1 } } else { Self { month: self.month + 1, ..self } }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        if self.month == 1 { Self { year: self.year - 1, month: 12 } } else { Self { month: self.month - 1, ..self } }
    }

    #[must_use]
    pub fn contains(self, date: &DateTime<Utc>) -> bool {
        Self::of(date) == self
    }
}

// =============================================================================
// HIGHLIGHTS
// =============================================================================

/// Totals shown on the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Highlights {
    pub entries: f64,
    pub expenses: f64,
    /// `entries - expenses`.
    pub total: f64,
    pub last_entry: Option<DateTime<Utc>>,
    pub last_expense: Option<DateTime<Utc>>,
}

impl Highlights {
    /// # Errors
    ///
    /// Returns [`TransactionError::InvalidAmount`] on the first unparsable amount.
    pub fn compute(transactions: &[Transaction]) -> Result<Self, TransactionError> {
        let mut highlights = Self::default();
        for tx in transactions {
            let amount = tx.amount_value()?;
            let (sum, last) = match tx.kind {
                TransactionKind::Positive => (&mut highlights.entries, &mut highlights.last_entry),
                TransactionKind::Negative => (&mut highlights.expenses, &mut highlights.last_expense),
            };
            *sum += amount;
            *last = Some(last.map_or(tx.date, |d| d.max(tx.date)));
        }
        highlights.total = highlights.entries - highlights.expenses;
        Ok(highlights)
    }
}

// =============================================================================
// CATEGORY BREAKDOWN
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub total: f64,
    /// Share of the month's expenses, 0 to 100.
    pub percent: f64,
}

impl CategoryTotal {
    /// Whole-number percentage label, e.g. `"42%"`.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.percent.round())
    }
}

/// Expense totals per category for `month`, in catalogue order.
///
/// Categories with no spending are omitted. Expenses in categories outside
/// the catalogue still count toward the month total used for percentages.
///
/// # Errors
///
/// Returns [`TransactionError::InvalidAmount`] on the first unparsable amount
/// among the month's expenses.
pub fn expenses_by_category(
    transactions: &[Transaction],
    categories: &[Category],
    month: Month,
) -> Result<Vec<CategoryTotal>, TransactionError> {
    let expenses = transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Negative && month.contains(&tx.date))
        .map(|tx| tx.amount_value().map(|amount| (tx.category.as_str(), amount)))
        .collect::<Result<Vec<_>, _>>()?;

    let month_total: f64 = expenses.iter().map(|(_, amount)| amount).sum();

    Ok(categories
        .iter()
        .filter_map(|category| {
            let total: f64 = expenses
                .iter()
                .filter(|(key, _)| *key == category.key)
                .map(|(_, amount)| amount)
                .sum();
            (total > 0.0).then(|| CategoryTotal {
                key: category.key,
                name: category.name,
                color: category.color,
                total,
                percent: total / month_total * 100.0,
            })
        })
        .collect())
}

// =============================================================================
// MONTHLY SUMMARY
// =============================================================================

/// Highlights and category breakdown for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: Month,
    pub highlights: Highlights,
    pub categories: Vec<CategoryTotal>,
}

impl MonthlySummary {
    /// # Errors
    ///
    /// Returns [`TransactionError::InvalidAmount`] on the first unparsable
    /// amount within the month.
    pub fn compute(
        transactions: &[Transaction],
        categories: &[Category],
        month: Month,
    ) -> Result<Self, TransactionError> {
        let in_month: Vec<Transaction> = transactions
            .iter()
            .filter(|tx| month.contains(&tx.date))
            .cloned()
            .collect();
        Ok(Self {
            month,
            highlights: Highlights::compute(&in_month)?,
            categories: expenses_by_category(&in_month, categories, month)?,
        })
    }
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
