//! Account service
//!
//! Account creation and login, plus the mutating session operations. Every
//! mutation is followed by exactly one sync to the store, which is what the
//! store's one-new-item-per-block update contract relies on.

use tracing::{error, info};

use crate::error::{FinpalError, FinpalResult};
use crate::models::{RecurringTransaction, Transaction, User};
use crate::services::budget::{self, BudgetWarning, LimitChange};
use crate::storage::UserStore;

/// Minimum password length accepted at account creation
pub const MIN_PASSWORD_LEN: usize = 8;

/// Service for user accounts and their recorded data
pub struct AccountService<'a> {
    store: &'a UserStore,
}

impl<'a> AccountService<'a> {
    pub fn new(store: &'a UserStore) -> Self {
        Self { store }
    }

    /// Create and persist a new user
    pub fn create(&self, username: &str, password: &str, nickname: &str) -> FinpalResult<User> {
        validate_field("Username", username)?;
        validate_field("Password", password)?;
        validate_field("Nickname", nickname)?;

        if username.trim().is_empty() {
            return Err(FinpalError::Validation("Username cannot be empty".into()));
        }

        if self.store.exists(username)? {
            return Err(FinpalError::Duplicate {
                entity_type: "User",
                identifier: username.to_string(),
            });
        }

        if !is_password_strong(password) {
            return Err(FinpalError::Validation(format!(
                "Password is not strong enough. It must be at least {} characters long, \
                 include a combination of letters, numbers, and special characters.",
                MIN_PASSWORD_LEN
            )));
        }

        let user = User::new(username, password, nickname);
        self.store.save(&user)?;
        info!(username, "account created");

        Ok(user)
    }

    /// Load a user and check their password
    pub fn login(&self, username: &str, password: &str) -> FinpalResult<User> {
        let user = self
            .store
            .load(username)?
            .ok_or_else(|| FinpalError::user_not_found(username))?;

        if user.password != password {
            return Err(FinpalError::Authentication("Incorrect password".into()));
        }

        Ok(user)
    }

    /// Record a one-time transaction and sync it
    ///
    /// Expenses are checked against the category limit before being added; the
    /// returned warning is for the caller to show.
    pub fn record_transaction(
        &self,
        user: &mut User,
        transaction: Transaction,
    ) -> FinpalResult<Option<BudgetWarning>> {
        validate_amount(transaction.amount)?;
        validate_field("Category", &transaction.category)?;

        let warning = if transaction.is_expense() {
            budget::check_expense(user, &transaction.category, transaction.amount)
        } else {
            None
        };

        user.add_transaction(transaction);
        self.sync(user)?;

        Ok(warning)
    }

    /// Add a recurring transaction and sync it
    pub fn add_recurring(
        &self,
        user: &mut User,
        recurring: RecurringTransaction,
    ) -> FinpalResult<()> {
        validate_amount(recurring.amount)?;
        validate_field("Category", &recurring.category)?;
        validate_field("Frequency", &recurring.frequency)?;

        user.add_recurring(recurring);
        self.sync(user)
    }

    /// Set a category limit and sync it
    ///
    /// A new category is appended by an incremental update; an overwritten one
    /// needs its record rewritten because the row count does not change.
    pub fn set_budget_limit(
        &self,
        user: &mut User,
        category: &str,
        limit: f64,
    ) -> FinpalResult<LimitChange> {
        validate_amount(limit)?;
        validate_field("Category", category)?;

        let change = budget::set_limit(user, category, limit);

        let result = if change.previous_limit.is_some() {
            self.store.replace(user)
        } else {
            self.store.update(user)
        };
        result.map_err(|e| log_sync_failure(user, e))?;

        Ok(change)
    }

    fn sync(&self, user: &User) -> FinpalResult<()> {
        self.store.update(user).map_err(|e| log_sync_failure(user, e))
    }
}

fn log_sync_failure(user: &User, err: FinpalError) -> FinpalError {
    error!(username = %user.username, error = %err, "failed to sync user data");
    err
}

/// Check that a password has the length and character mix required for new accounts
///
/// At least [`MIN_PASSWORD_LEN`] characters including a letter, a digit, and a
/// non-whitespace symbol.
pub fn is_password_strong(password: &str) -> bool {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return false;
    }

    let has_letter = password.chars().any(char::is_alphabetic);
    let has_digit = password.chars().any(char::is_numeric);
    let has_special = password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    has_letter && has_digit && has_special
}

fn validate_amount(amount: f64) -> FinpalResult<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(FinpalError::Validation(format!(
            "Amount must be a non-negative number, got {}",
            amount
        )));
    }
    Ok(())
}

// The data file has no escaping, so separators inside a field would corrupt the record
fn validate_field(name: &str, value: &str) -> FinpalResult<()> {
    if value.contains(',') || value.contains('\n') || value.contains('\r') {
        return Err(FinpalError::Validation(format!(
            "{} cannot contain commas or line breaks",
            name
        )));
    }
    Ok(())
}
