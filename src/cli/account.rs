//! Account CLI commands
//!
//! Registration and login checks. Both read the password from `--password`,
//! the environment, or a hidden prompt.

use crate::error::FinpalResult;
use crate::services::AccountService;
use crate::storage::UserStore;

use super::session::resolve_password;

/// Create a new account
pub fn handle_register(
    store: &UserStore,
    username: &str,
    nickname: &str,
    password: Option<String>,
) -> FinpalResult<()> {
    let password = resolve_password(password, "Choose a password: ")?;
    let user = AccountService::new(store).create(username, &password, nickname)?;

    println!("Account created for {}. Welcome, {}!", user.username, user.nickname);
    Ok(())
}

/// Check credentials and greet the user
pub fn handle_login(store: &UserStore, username: &str, password: Option<String>) -> FinpalResult<()> {
    let password = resolve_password(password, "Password: ")?;
    let user = AccountService::new(store).login(username, &password)?;

    println!("Welcome back, {}!", user.nickname);
    Ok(())
}
