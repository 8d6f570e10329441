//! Core data models for FinPal
//!
//! This module contains the data structures of the finance domain: one-time
//! transactions, recurring transactions, budget limits, and the user that
//! owns them.

pub mod amount;
pub mod budget_limits;
pub mod recurring;
pub mod transaction;
pub mod user;

pub use amount::format_amount;
pub use budget_limits::BudgetLimits;
pub use recurring::RecurringTransaction;
pub use transaction::{Transaction, TransactionKind};
pub use user::User;
