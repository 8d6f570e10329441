//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod budget;
pub mod recurring;
pub mod report;
pub mod session;
pub mod transaction;

pub use account::{handle_login, handle_register};
pub use budget::{handle_budget_command, BudgetCommands};
pub use recurring::{handle_recurring_command, RecurringCommands};
pub use report::{handle_report_command, ReportCommands};
pub use session::{Credentials, PASSWORD_ENV};
pub use transaction::{handle_transaction_command, TransactionCommands};
