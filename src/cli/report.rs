//! Report CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_insights, format_statement};
use crate::error::FinpalResult;
use crate::services::{insights, statement};
use crate::storage::UserStore;

use super::session::Credentials;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expenses, savings and budget advice
    Insights {
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Upcoming financial statement
    Statement {
        #[command(flatten)]
        credentials: Credentials,
    },
}

/// Handle a report command
pub fn handle_report_command(
    store: &UserStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinpalResult<()> {
    let currency = &settings.currency_symbol;

    match cmd {
        ReportCommands::Insights { credentials } => {
            let user = credentials.login(store)?;
            print!("{}", format_insights(&insights(&user), currency));
        }
        ReportCommands::Statement { credentials } => {
            let user = credentials.login(store)?;
            print!("{}", format_statement(&statement(&user), currency));
        }
    }

    Ok(())
}
