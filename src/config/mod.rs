//! Configuration module for FinPal
//!
//! - XDG-compliant path resolution
//! - Persisted settings

pub mod paths;
pub mod settings;

pub use paths::FinpalPaths;
pub use settings::Settings;
