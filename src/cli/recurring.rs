//! Recurring transaction CLI commands

use clap::Subcommand;

use crate::display::format_recurring_list;
use crate::error::FinpalResult;
use crate::models::RecurringTransaction;
use crate::services::{AccountService, Frequency};
use crate::storage::UserStore;

use super::session::Credentials;
use super::transaction::KindArgs;

/// Recurring transaction subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Add a recurring income or expense
    Add {
        /// Category name
        category: String,
        /// Amount per occurrence
        amount: f64,
        /// How often it recurs (daily, weekly, bi-weekly, monthly)
        frequency: String,
        #[command(flatten)]
        kind: KindArgs,
        #[command(flatten)]
        credentials: Credentials,
    },
    /// List recurring transactions
    List {
        #[command(flatten)]
        credentials: Credentials,
    },
}

/// Handle a recurring command
pub fn handle_recurring_command(store: &UserStore, cmd: RecurringCommands) -> FinpalResult<()> {
    match cmd {
        RecurringCommands::Add {
            category,
            amount,
            frequency,
            kind,
            credentials,
        } => {
            let mut user = credentials.login(store)?;

            if Frequency::parse(&frequency).is_none() {
                println!(
                    "Unknown frequency '{}'. It will be projected as monthly.",
                    frequency
                );
            }

            let recurring = RecurringTransaction::new(category, amount, frequency, kind.kind());
            AccountService::new(store).add_recurring(&mut user, recurring.clone())?;

            println!("Recurring transaction added: {}", recurring);
        }

        RecurringCommands::List { credentials } => {
            let user = credentials.login(store)?;
            print!("{}", format_recurring_list(&user.recurring));
        }
    }

    Ok(())
}
