//! Transaction display formatting
//!
//! Listings of one-time and recurring transactions. Rows use the same comma
//! form as the data file.

use crate::models::{RecurringTransaction, Transaction};

/// Column header for one-time transaction listings
pub const TRANSACTION_COLUMNS: &str = "[DATE], [CATEGORY], [AMOUNT], [TYPE]";

/// Column header for recurring transaction listings
pub const RECURRING_COLUMNS: &str = "[Category], [Amount], [Frequency], [Type]";

/// Format the one-time transaction log
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(TRANSACTION_COLUMNS);
    output.push('\n');

    for txn in transactions {
        output.push_str(&txn.to_string());
        output.push('\n');
    }

    output
}

/// Format the recurring transaction list
pub fn format_recurring_list(recurring: &[RecurringTransaction]) -> String {
    let mut output = String::new();
    output.push_str("Recurring Transactions:\n");
    output.push_str(RECURRING_COLUMNS);
    output.push('\n');

    for rt in recurring {
        output.push_str(&rt.to_string());
        output.push('\n');
    }

    if recurring.is_empty() {
        output.push_str("No recurring transactions found.\n");
    }

    output
}
