//! Budget CLI commands
//!
//! Setting per-category limits and showing them against current spend.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_limits, format_budget_set};
use crate::error::FinpalResult;
use crate::services::{category_spend, AccountService};
use crate::storage::UserStore;

use super::session::Credentials;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the spending limit for a category
    Set {
        /// Category name
        category: String,
        /// Monthly limit
        limit: f64,
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Show limits and current spend
    Show {
        #[command(flatten)]
        credentials: Credentials,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &UserStore,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinpalResult<()> {
    let currency = &settings.currency_symbol;

    match cmd {
        BudgetCommands::Set {
            category,
            limit,
            credentials,
        } => {
            let mut user = credentials.login(store)?;
            let change = AccountService::new(store).set_budget_limit(&mut user, &category, limit)?;

            println!("{}", format_budget_set(&category, limit, currency));
            if let Some(warning) = change.warning(&category) {
                println!("{}", warning.message(currency));
            }
        }

        BudgetCommands::Show { credentials } => {
            let user = credentials.login(store)?;
            println!("{}", settings.category_prompt());
            print!(
                "{}",
                format_budget_limits(&user.budget_limits, currency, |category| {
                    category_spend(&user, category)
                })
            );
        }
    }

    Ok(())
}
