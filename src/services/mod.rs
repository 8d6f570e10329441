//! Service layer for FinPal
//!
//! Business logic on top of the storage layer: frequency projection, budget
//! evaluation, account operations, and report building.

pub mod account;
pub mod budget;
pub mod projection;
pub mod report;

pub use account::AccountService;
pub use budget::{
    category_spend, check_expense, projected_totals, set_limit, BudgetWarning, LimitChange,
};
pub use projection::{monthly_multiplier, Frequency};
pub use report::{insights, statement, CategoryAdvice, Insights, Statement};
