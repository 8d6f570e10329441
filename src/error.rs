//! Custom error types for FinPal
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for FinPal operations
#[derive(Error, Debug)]
pub enum FinpalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A record in the data file could not be decoded
    #[error("Malformed record at line {line}: {reason}")]
    Decode { line: usize, reason: String },

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Wrong credentials
    #[error("Authentication failed: {0}")]
    Authentication(String),
}

impl FinpalError {
    /// Create a "not found" error for users
    pub fn user_not_found(username: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: username.into(),
        }
    }

    /// Create a decode error for a 1-based line number
    pub fn decode(line: usize, reason: impl Into<String>) -> Self {
        Self::Decode {
            line,
            reason: reason.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a decode error
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

impl From<std::io::Error> for FinpalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinpalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for FinPal operations
pub type FinpalResult<T> = Result<T, FinpalError>;
