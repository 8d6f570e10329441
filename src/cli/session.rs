//! Login arguments shared by every per-user command

use clap::Args;

use crate::error::{FinpalError, FinpalResult};
use crate::models::User;
use crate::services::AccountService;
use crate::storage::UserStore;

/// Environment variable consulted when `--password` is not given
pub const PASSWORD_ENV: &str = "FINPAL_PASSWORD";

/// Credentials for the user a command acts on
#[derive(Args, Debug, Clone)]
pub struct Credentials {
    /// Username to act as
    #[arg(short, long = "user")]
    pub user: String,

    /// Password (prompted for when omitted)
    #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
    pub password: Option<String>,
}

impl Credentials {
    /// Log in, prompting for the password if none was supplied
    pub fn login(&self, store: &UserStore) -> FinpalResult<User> {
        let password = resolve_password(self.password.clone(), "Password: ")?;
        AccountService::new(store).login(&self.user, &password)
    }
}

/// Use the supplied password, or read one from the terminal without echo
pub fn resolve_password(provided: Option<String>, prompt: &str) -> FinpalResult<String> {
    match provided {
        Some(password) => Ok(password),
        None => rpassword::prompt_password(prompt)
            .map_err(|e| FinpalError::Io(format!("Failed to read password: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_supplied_password_is_used() {
        assert_eq!(
            resolve_password(Some("secret#1".into()), "Password: ").unwrap(),
            "secret#1"
        );
    }

    #[test]
    fn test_login_with_credentials() {
        let temp_dir = TempDir::new().unwrap();
        let store = UserStore::new(temp_dir.path().join("userData.txt"));
        AccountService::new(&store)
            .create("alice", "hunter2!x", "Al")
            .unwrap();

        let creds = Credentials {
            user: "alice".into(),
            password: Some("hunter2!x".into()),
        };
        assert_eq!(creds.login(&store).unwrap().nickname, "Al");

        let wrong = Credentials {
            user: "alice".into(),
            password: Some("nope".into()),
        };
        assert!(matches!(
            wrong.login(&store),
            Err(FinpalError::Authentication(_))
        ));
    }
}
