//! Budget evaluation
//!
//! Projected totals, per-category spend, and the overspend checks run when an
//! expense is recorded or a limit is set.

use std::fmt;

use tracing::{debug, warn};

use crate::models::{format_amount, TransactionKind, User};

use super::projection::monthly_multiplier;

/// Total income and expenses, with recurring items projected to one month
///
/// Returns `(income, expense)`.
pub fn projected_totals(user: &User) -> (f64, f64) {
    let mut income = 0.0;
    let mut expense = 0.0;

    for txn in &user.transactions {
        match txn.kind {
            TransactionKind::Income => income += txn.amount,
            TransactionKind::Expense => expense += txn.amount,
        }
    }

    for rt in &user.recurring {
        let projected = rt.amount * monthly_multiplier(&rt.frequency);
        match rt.kind {
            TransactionKind::Income => income += projected,
            TransactionKind::Expense => expense += projected,
        }
    }

    (income, expense)
}

/// One-time expenses in `category`
pub fn one_time_spend(user: &User, category: &str) -> f64 {
    user.transactions
        .iter()
        .filter(|t| t.is_expense() && t.category == category)
        .fold(0.0, |total, t| total + t.amount)
}

/// One-time expenses in `category` plus its projected recurring expenses
pub fn category_spend(user: &User, category: &str) -> f64 {
    let recurring = user
        .recurring
        .iter()
        .filter(|rt| rt.is_expense() && rt.category == category)
        .fold(0.0, |total, rt| {
            total + rt.amount * monthly_multiplier(&rt.frequency)
        });

    one_time_spend(user, category) + recurring
}

/// A budget overrun worth telling the user about
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetWarning {
    /// A single expense is larger than the category's whole limit
    ExceedsLimit { category: String },
    /// Recording the expense takes the category's one-time spend over its limit
    WillExceed { category: String },
    /// Spending already recorded is above a newly set limit
    OverNewLimit { category: String, spend: f64 },
}

impl BudgetWarning {
    /// Render the warning with the given currency symbol
    pub fn message(&self, currency: &str) -> String {
        match self {
            Self::ExceedsLimit { category } => {
                format!("Warning: This expense exceeds your budget limit for {}", category)
            }
            Self::WillExceed { category } => format!(
                "Warning: Adding this transaction will exceed your budget for {}",
                category
            ),
            Self::OverNewLimit { category, spend } => format!(
                "Warning: Your current spending in {} is {}{}, which exceeds your new budget limit. \
                 Consider adjusting your budget or expenses.",
                category,
                currency,
                format_amount(*spend)
            ),
        }
    }
}

impl fmt::Display for BudgetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message("$"))
    }
}

/// Check an expense that is about to be recorded against its category limit
///
/// The single-expense check runs first; the cumulative check only runs when
/// it did not fire. Categories without a limit never warn.
pub fn check_expense(user: &User, category: &str, amount: f64) -> Option<BudgetWarning> {
    let limit = user.budget_limits.get(category)?;

    if amount > limit {
        warn!(category, amount, limit, "expense exceeds budget limit");
        return Some(BudgetWarning::ExceedsLimit {
            category: category.to_string(),
        });
    }

    if one_time_spend(user, category) + amount > limit {
        warn!(category, amount, limit, "expense takes category over budget");
        return Some(BudgetWarning::WillExceed {
            category: category.to_string(),
        });
    }

    None
}

/// Outcome of setting a category limit
#[derive(Debug, Clone, PartialEq)]
pub struct LimitChange {
    /// Spend in the category at the time the limit was set
    pub prior_spend: f64,
    /// Whether that spend is above the new limit
    pub exceeded: bool,
    /// The limit that was replaced, if the category already had one
    pub previous_limit: Option<f64>,
}

impl LimitChange {
    pub fn warning(&self, category: &str) -> Option<BudgetWarning> {
        self.exceeded.then(|| BudgetWarning::OverNewLimit {
            category: category.to_string(),
            spend: self.prior_spend,
        })
    }
}

/// Set (or overwrite in place) a category's limit
pub fn set_limit(user: &mut User, category: &str, limit: f64) -> LimitChange {
    let prior_spend = category_spend(user, category);
    let previous_limit = user.budget_limits.set(category, limit);
    let exceeded = prior_spend > limit;

    debug!(category, limit, prior_spend, exceeded, "budget limit set");
    if exceeded {
        warn!(category, limit, prior_spend, "existing spend is over the new limit");
    }

    LimitChange {
        prior_spend,
        exceeded,
        previous_limit,
    }
}
