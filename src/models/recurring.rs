//! Recurring transaction model

use std::fmt;

use super::amount::format_amount;
use super::transaction::TransactionKind;

/// An income or expense that repeats on a fixed cadence
///
/// `frequency` keeps the label exactly as entered (`daily`, `weekly`,
/// `bi-weekly`, `monthly`, or anything else) so it is written back unchanged.
/// See [`crate::services::projection`] for how labels are interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringTransaction {
    pub category: String,
    pub amount: f64,
    pub frequency: String,
    pub kind: TransactionKind,
}

impl RecurringTransaction {
    pub fn new(
        category: impl Into<String>,
        amount: f64,
        frequency: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            category: category.into(),
            amount,
            frequency: frequency.into(),
            kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }
}

impl fmt::Display for RecurringTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.category,
            format_amount(self.amount),
            self.frequency,
            self.kind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_record_row() {
        let rt = RecurringTransaction::new("Rent", 200.0, "monthly", TransactionKind::Expense);
        assert_eq!(rt.to_string(), "Rent,200.0,monthly,Expense");
    }

    #[test]
    fn test_frequency_label_is_preserved() {
        let rt = RecurringTransaction::new("Gym", 15.5, "Weekly", TransactionKind::Expense);
        assert_eq!(rt.frequency, "Weekly");
        assert_eq!(rt.to_string(), "Gym,15.5,Weekly,Expense");
    }
}
