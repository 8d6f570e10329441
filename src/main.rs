use anyhow::Result;
use clap::{Parser, Subcommand};

use finpal::cli::{
    handle_budget_command, handle_login, handle_recurring_command, handle_register,
    handle_report_command, handle_transaction_command, PASSWORD_ENV,
};
use finpal::config::{paths::FinpalPaths, settings::Settings};
use finpal::storage::open_user_store;

#[derive(Parser)]
#[command(
    name = "finpal",
    version,
    about = "Terminal personal finance tracker",
    long_about = "FinPal records one-time and recurring income and expenses, \
                  tracks per-category budget limits, and reports projected \
                  monthly totals from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    Register {
        /// Username (must be unique)
        username: String,
        /// Display name
        nickname: String,
        /// Password (prompted for when omitted)
        #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,
    },

    /// Check a username and password
    Login {
        username: String,
        /// Password (prompted for when omitted)
        #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,
    },

    /// One-time transaction commands
    #[command(subcommand, alias = "transaction")]
    Txn(finpal::cli::TransactionCommands),

    /// Recurring transaction commands
    #[command(subcommand)]
    Recurring(finpal::cli::RecurringCommands),

    /// Budget limit commands
    #[command(subcommand)]
    Budget(finpal::cli::BudgetCommands),

    /// Financial reports
    #[command(subcommand)]
    Report(finpal::cli::ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    finpal::init_tracing();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinpalPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = open_user_store(&paths, &settings);

    match cli.command {
        Some(Commands::Register {
            username,
            nickname,
            password,
        }) => {
            handle_register(&store, &username, &nickname, password)?;
        }
        Some(Commands::Login { username, password }) => {
            handle_login(&store, &username, password)?;
        }
        Some(Commands::Txn(cmd)) => {
            handle_transaction_command(&store, &settings, cmd)?;
        }
        Some(Commands::Recurring(cmd)) => {
            handle_recurring_command(&store, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            if settings.save_if_missing(&paths)? {
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }
            println!("FinPal Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data file:      {}", store.path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Budget categories: {}", settings.budget_categories.join(", "));
        }
        None => {
            println!("FinPal - Terminal personal finance tracker");
            println!();
            println!("Run 'finpal --help' for usage information.");
            println!("Run 'finpal register <username> <nickname>' to get started.");
        }
    }

    Ok(())
}
