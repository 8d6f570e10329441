//! Transaction CLI commands
//!
//! Recording and listing one-time transactions.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::config::settings::Settings;
use crate::display::format_transaction_list;
use crate::error::{FinpalError, FinpalResult};
use crate::models::{Transaction, TransactionKind};
use crate::services::AccountService;
use crate::storage::UserStore;

use super::session::Credentials;

/// Income or expense, exactly one required
#[derive(Args, Debug, Clone, Copy)]
#[group(required = true, multiple = false)]
pub struct KindArgs {
    /// Record as income
    #[arg(long)]
    pub income: bool,
    /// Record as an expense
    #[arg(long)]
    pub expense: bool,
}

impl KindArgs {
    pub fn kind(&self) -> TransactionKind {
        if self.income {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a one-time transaction
    Add {
        /// Category name
        category: String,
        /// Amount (e.g., "45.50")
        amount: f64,
        #[command(flatten)]
        kind: KindArgs,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        #[command(flatten)]
        credentials: Credentials,
    },
    /// List recorded transactions
    List {
        #[command(flatten)]
        credentials: Credentials,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &UserStore,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinpalResult<()> {
    match cmd {
        TransactionCommands::Add {
            category,
            amount,
            kind,
            date,
            credentials,
        } => {
            let mut user = credentials.login(store)?;
            let date = parse_date_or_today(date.as_deref())?;
            let txn = Transaction::new(date, category, amount, kind.kind());

            let warning = AccountService::new(store).record_transaction(&mut user, txn.clone())?;
            if let Some(warning) = warning {
                println!("{}", warning.message(&settings.currency_symbol));
            }

            println!("Recorded transaction: {}", txn);
        }

        TransactionCommands::List { credentials } => {
            let user = credentials.login(store)?;
            print!("{}", format_transaction_list(&user.transactions));
        }
    }

    Ok(())
}

/// Parse a YYYY-MM-DD date, defaulting to today
pub fn parse_date_or_today(date_str: Option<&str>) -> FinpalResult<NaiveDate> {
    match date_str {
        Some(date_str) => NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            FinpalError::Validation(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD",
                date_str
            ))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
