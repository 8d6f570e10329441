//! Display formatting for terminal output
//!
//! Turns models and report results into the text printed by the CLI.

pub mod report;
pub mod transaction;

pub use report::{format_budget_limits, format_budget_set, format_insights, format_statement};
pub use transaction::{format_recurring_list, format_transaction_list};
