//! FinPal - Terminal personal finance tracker
//!
//! This library provides the core of the FinPal finance tracker: per-user
//! records of one-time and recurring transactions and per-category budget
//! limits, kept in a single flat text file shared by all users.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (users, transactions, budget limits)
//! - `storage`: Flat-file record codec and user store
//! - `services`: Projection, budget evaluation, accounts and reports
//! - `display`: Text formatting for terminal output
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finpal::config::{paths::FinpalPaths, settings::Settings};
//! use finpal::storage::open_user_store;
//!
//! let paths = FinpalPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = open_user_store(&paths, &settings);
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinpalError, FinpalResult};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_DIRECTIVE: &str = "finpal=warn";

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

        // Another subscriber may already be installed by an embedding host
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
