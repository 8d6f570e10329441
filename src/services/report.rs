//! Report service
//!
//! Builds the financial insights summary and the upcoming statement from a
//! user's recorded data. Rendering lives in [`crate::display::report`].

use crate::models::{RecurringTransaction, Transaction, TransactionKind, User};

use super::budget::projected_totals;

/// How a budgeted category is doing
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryAdvice {
    OverBudget {
        category: String,
        spent: f64,
        budget: f64,
    },
    WithinBudget {
        category: String,
        spent: f64,
        budget: f64,
    },
}

/// Income, expenses and per-category advice
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    /// Income with recurring items projected to one month
    pub total_income: f64,
    /// Expenses with recurring items projected to one month
    pub total_expenses: f64,
    pub net_savings: f64,
    /// One entry per budgeted category with any spend, in limit order
    pub advice: Vec<CategoryAdvice>,
}

/// Build the insights summary
///
/// Totals project recurring items by frequency. The advice compares each
/// budgeted category's one-time expenses plus its recurring expense amounts
/// taken once (not projected) against the limit.
pub fn insights(user: &User) -> Insights {
    let (total_income, total_expenses) = projected_totals(user);

    let advice = user
        .budget_limits
        .iter()
        .filter_map(|(category, budget)| {
            let spent = unprojected_spend(user, category);
            if spent > budget {
                Some(CategoryAdvice::OverBudget {
                    category: category.to_string(),
                    spent,
                    budget,
                })
            } else if spent > 0.0 {
                Some(CategoryAdvice::WithinBudget {
                    category: category.to_string(),
                    spent,
                    budget,
                })
            } else {
                None
            }
        })
        .collect();

    Insights {
        total_income,
        total_expenses,
        net_savings: total_income - total_expenses,
        advice,
    }
}

fn unprojected_spend(user: &User, category: &str) -> f64 {
    let one_time = user
        .transactions
        .iter()
        .filter(|t| t.is_expense() && t.category == category)
        .fold(0.0, |total, t| total + t.amount);

    user.recurring
        .iter()
        .filter(|rt| rt.is_expense() && rt.category == category)
        .fold(one_time, |total, rt| total + rt.amount)
}

/// The upcoming financial statement
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub transactions: Vec<Transaction>,
    pub recurring: Vec<RecurringTransaction>,
    pub projected_income: f64,
    pub projected_expenses: f64,
}

impl Statement {
    pub fn net_balance(&self) -> f64 {
        self.projected_income - self.projected_expenses
    }
}

/// Build the statement
///
/// Each recurring item counts once, as its next-month occurrence, rather than
/// being projected by frequency.
pub fn statement(user: &User) -> Statement {
    let mut projected_income = 0.0;
    let mut projected_expenses = 0.0;

    let amounts = user
        .transactions
        .iter()
        .map(|t| (t.kind, t.amount))
        .chain(user.recurring.iter().map(|rt| (rt.kind, rt.amount)));

    for (kind, amount) in amounts {
        match kind {
            TransactionKind::Income => projected_income += amount,
            TransactionKind::Expense => projected_expenses += amount,
        }
    }

    Statement {
        transactions: user.transactions.clone(),
        recurring: user.recurring.clone(),
        projected_income,
        projected_expenses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insights_empty_user() {
        let insights = insights(&User::new("u", "p", "n"));
        assert_eq!(insights.total_income, 0.0);
        assert_eq!(insights.total_expenses, 0.0);
        assert_eq!(insights.net_savings, 0.0);
        assert!(insights.advice.is_empty());
    }

    #[test]
    fn test_insights_advice() {
        let mut user = User::new("u", "p", "n");
        user.budget_limits.set("Entertainment", 200.0);
        user.budget_limits.set("Food", 300.0);
        user.budget_limits.set("Travel", 1000.0);
        user.add_transaction(Transaction::today("Entertainment", 400.0, TransactionKind::Expense));
        user.add_transaction(Transaction::today("Food", 50.0, TransactionKind::Expense));
        user.add_recurring(RecurringTransaction::new(
            "Food",
            20.0,
            "daily",
            TransactionKind::Expense,
        ));

        let insights = insights(&user);
        assert_eq!(insights.total_expenses, 400.0 + 50.0 + 600.0);
        assert_eq!(
            insights.advice,
            vec![
                CategoryAdvice::OverBudget {
                    category: "Entertainment".into(),
                    spent: 400.0,
                    budget: 200.0,
                },
                CategoryAdvice::WithinBudget {
                    category: "Food".into(),
                    spent: 70.0,
                    budget: 300.0,
                },
            ]
        );
    }

    #[test]
    fn test_statement_counts_recurring_once() {
        let mut user = User::new("u", "p", "n");
        user.add_transaction(Transaction::today("Food", 20.0, TransactionKind::Expense));
        user.add_recurring(RecurringTransaction::new(
            "Rent",
            200.0,
            "monthly",
            TransactionKind::Expense,
        ));
        user.add_recurring(RecurringTransaction::new(
            "Pay-cheque",
            600.0,
            "bi-weekly",
            TransactionKind::Income,
        ));

        let statement = statement(&user);
        assert_eq!(statement.projected_income, 600.0);
        assert_eq!(statement.projected_expenses, 220.0);
        assert_eq!(statement.net_balance(), 380.0);
        assert_eq!(statement.recurring.len(), 2);
    }
}
