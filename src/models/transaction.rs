//! Transaction model
//!
//! Represents a one-time income or expense. Transactions are immutable once
//! recorded and are owned by the user's ordered transaction log.

use chrono::{Local, NaiveDate};
use std::fmt;

use super::amount::format_amount;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parse the stored label (`Income` or `Expense`)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Income" => Some(Self::Income),
            "Expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// The label written to the data file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A one-time financial transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Free-text category label (e.g. "Food", "Rent")
    pub category: String,

    /// Non-negative amount; the direction is carried by `kind`
    pub amount: f64,

    /// Income or expense
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a transaction on a specific date
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            kind,
        }
    }

    /// Create a transaction dated today (local time)
    pub fn today(category: impl Into<String>, amount: f64, kind: TransactionKind) -> Self {
        Self::new(Local::now().date_naive(), category, amount, kind)
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.date.format("%Y-%m-%d"),
            self.category,
            format_amount(self.amount),
            self.kind
        )
    }
}
