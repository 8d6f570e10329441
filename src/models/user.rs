//! User model
//!
//! The aggregate root: credentials, display name, and the three ordered
//! collections that make up a stored record.

use std::fmt;

use super::budget_limits::BudgetLimits;
use super::recurring::RecurringTransaction;
use super::transaction::Transaction;

/// A FinPal user and everything they have recorded
///
/// The password is held and stored in plain text; the data file format has no
/// room for a hash without a version marker.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: String,
    pub password: String,
    pub nickname: String,
    pub transactions: Vec<Transaction>,
    pub recurring: Vec<RecurringTransaction>,
    pub budget_limits: BudgetLimits,
}

impl User {
    /// Create a user with no recorded data
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        nickname: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            nickname: nickname.into(),
            transactions: Vec::new(),
            recurring: Vec::new(),
            budget_limits: BudgetLimits::new(),
        }
    }

    /// Append a one-time transaction
    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Append a recurring transaction
    pub fn add_recurring(&mut self, recurring: RecurringTransaction) {
        self.recurring.push(recurring);
    }

    /// The header line that opens this user's record
    pub fn header(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.username, self.password, self.nickname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    #[test]
    fn test_new_user_is_empty() {
        let user = User::new("u", "p", "n");
        assert!(user.transactions.is_empty());
        assert!(user.recurring.is_empty());
        assert!(user.budget_limits.is_empty());
        assert_eq!(user.header(), "u,p,n");
    }

    #[test]
    fn test_equality_covers_collections() {
        let mut a = User::new("u", "p", "n");
        let b = User::new("u", "p", "n");
        assert_eq!(a, b);

        a.add_recurring(RecurringTransaction::new(
            "Rent",
            200.0,
            "monthly",
            TransactionKind::Expense,
        ));
        assert_ne!(a, b);
    }
}
