//! User repository backed by a single flat text file
//!
//! The file is the concatenation of user records (see [`super::codec`]) with
//! no index. Every operation is a blocking full scan or full rewrite, and no
//! locking is done: callers sharing a file across threads must serialise
//! access themselves.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FinpalError, FinpalResult};
use crate::models::User;

use super::codec::{
    self, encode_budget_limit, BUDGET_LIMITS_MARKER, RECORD_TERMINATOR, RECURRING_MARKER,
};
use super::file_io::{append_lines, open_reader, read_lines, write_lines_atomic};

/// Repository for user records
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    /// Create a store over the given data file (it need not exist yet)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether a record exists for `username`
    pub fn exists(&self, username: &str) -> FinpalResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        let found = codec::contains_user(open_reader(&self.path)?, username)?;
        debug!(username, found, "checked user existence");
        Ok(found)
    }

    /// Load the record for `username`
    ///
    /// An absent user is `Ok(None)`, not an error.
    pub fn load(&self, username: &str) -> FinpalResult<Option<User>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let user = codec::decode_user(open_reader(&self.path)?, username)?;
        debug!(username, found = user.is_some(), "loaded user");
        Ok(user)
    }

    /// Append a full record for `user` to the end of the file
    ///
    /// Not idempotent: saving the same user twice stores two records.
    pub fn save(&self, user: &User) -> FinpalResult<()> {
        append_lines(&self.path, &codec::encode_user(user))?;
        debug!(username = %user.username, "saved user record");
        Ok(())
    }

    /// Sync the newest item of each collection into the user's stored record
    ///
    /// For each block, the row count expected from memory is compared with the
    /// file: when the file is exactly one row short, the last in-memory item
    /// (the last inserted budget category, for limits) is inserted before the
    /// block's closing marker. Records of other users are left untouched.
    ///
    /// Precondition: at most one item was added to each collection since the
    /// previous sync. Earlier unsynced additions are not recovered, and a
    /// changed limit for an existing category is not detected; use
    /// [`UserStore::replace`] for that.
    pub fn update(&self, user: &User) -> FinpalResult<()> {
        let mut lines = read_lines(&self.path)?;
        let header = self.find_header(&lines, user)?;
        let mut inserted = 0;

        let mut index = header + user.transactions.len() + 1;
        if line_at(&lines, index)? == RECURRING_MARKER {
            if let Some(newest) = user.transactions.last() {
                lines.insert(index, newest.to_string());
                inserted += 1;
            }
        }

        index += user.recurring.len() + 1;
        if line_at(&lines, index)? == BUDGET_LIMITS_MARKER {
            if let Some(newest) = user.recurring.last() {
                lines.insert(index, newest.to_string());
                inserted += 1;
            }
        }

        index += user.budget_limits.len() + 1;
        if line_at(&lines, index)? == RECORD_TERMINATOR {
            if let Some((category, limit)) = user.budget_limits.last() {
                lines.insert(index, encode_budget_limit(category, limit));
                inserted += 1;
            }
        }

        write_lines_atomic(&self.path, &lines)?;
        debug!(username = %user.username, inserted, "updated user record");
        Ok(())
    }

    /// Rewrite the user's whole record in place from its in-memory state
    pub fn replace(&self, user: &User) -> FinpalResult<()> {
        let mut lines = read_lines(&self.path)?;
        let header = self.find_header(&lines, user)?;

        let end = lines[header..]
            .iter()
            .position(|line| line == RECORD_TERMINATOR)
            .map(|offset| header + offset)
            .ok_or_else(|| {
                FinpalError::decode(
                    lines.len(),
                    format!("record for '{}' has no terminator", user.username),
                )
            })?;

        lines.splice(header..=end, codec::encode_user(user));
        write_lines_atomic(&self.path, &lines)?;
        debug!(username = %user.username, "replaced user record");
        Ok(())
    }

    fn find_header(&self, lines: &[String], user: &User) -> FinpalResult<usize> {
        let header = user.header();
        codec::header_indices(lines)
            .into_iter()
            .find(|&index| lines[index] == header)
            .ok_or_else(|| FinpalError::user_not_found(&user.username))
    }
}

fn line_at(lines: &[String], index: usize) -> FinpalResult<&str> {
    lines.get(index).map(String::as_str).ok_or_else(|| {
        FinpalError::decode(
            lines.len(),
            "record ends before its expected block marker",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecurringTransaction, Transaction, TransactionKind};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn food() -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            "Food",
            10.0,
            TransactionKind::Expense,
        )
    }

    fn stores(temp_dir: &TempDir) -> (UserStore, UserStore) {
        (
            UserStore::new(temp_dir.path().join("testfile1.txt")),
            UserStore::new(temp_dir.path().join("testfile2.txt")),
        )
    }

    fn contents(store: &UserStore) -> String {
        fs::read_to_string(store.path()).unwrap()
    }

    #[test]
    fn test_save_empty_user() {
        let temp_dir = TempDir::new().unwrap();
        let (store, _) = stores(&temp_dir);

        store.save(&User::new("u", "p", "n")).unwrap();

        assert_eq!(
            contents(&store),
            "u,p,n\nTRANSACTIONS:\nRECURRING TRANSACTIONS:\nBUDGET LIMITS:\n---\n"
        );
    }

    #[test]
    fn test_save_appends_after_existing_records() {
        let temp_dir = TempDir::new().unwrap();
        let (store, _) = stores(&temp_dir);
        let mut first = User::new("a", "b", "c");
        first.add_transaction(food());

        store.save(&first).unwrap();
        store.save(&User::new("u", "p", "n")).unwrap();

        assert_eq!(
            contents(&store),
            "a,b,c\nTRANSACTIONS:\n2024-04-02,Food,10.0,Expense\nRECURRING TRANSACTIONS:\nBUDGET LIMITS:\n---\n\
             u,p,n\nTRANSACTIONS:\nRECURRING TRANSACTIONS:\nBUDGET LIMITS:\n---\n"
        );
    }

    #[test]
    fn test_save_twice_duplicates_record() {
        let temp_dir = TempDir::new().unwrap();
        let (store, _) = stores(&temp_dir);
        let user = User::new("u", "p", "n");

        store.save(&user).unwrap();
        store.save(&user).unwrap();

        assert_eq!(contents(&store).matches("u,p,n\n").count(), 2);
    }

    #[test]
    fn test_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let (store, _) = stores(&temp_dir);
        let mut user = User::new("u", "p", "n");
        user.add_transaction(food());
        user.add_recurring(RecurringTransaction::new(
            "Pay-cheque",
            600.0,
            "bi-weekly",
            TransactionKind::Income,
        ));
        user.budget_limits.set("Food", 250.0);

        store.save(&User::new("other", "x", "y")).unwrap();
        store.save(&user).unwrap();

        assert_eq!(store.load("u").unwrap(), Some(user));
    }

    #[test]
    fn test_load_absent_user_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let (store, _) = stores(&temp_dir);

        assert_eq!(store.load("a").unwrap(), None);

        store.save(&User::new("u", "p", "n")).unwrap();
        assert_eq!(store.load("a").unwrap(), None);
    }

    #[test]
    fn test_exists() {
        let temp_dir = TempDir::new().unwrap();
        let (store, _) = stores(&temp_dir);

        assert!(!store.exists("a").unwrap());

        store.save(&User::new("u", "p", "n")).unwrap();
        store.save(&User::new("a", "b", "c")).unwrap();
        store.save(&User::new("d", "e", "f")).unwrap();

        assert!(store.exists("a").unwrap());
        assert!(store.exists("d").unwrap());
        assert!(!store.exists("z").unwrap());
    }

    #[test]
    fn test_exists_ignores_block_rows() {
        let temp_dir = TempDir::new().unwrap();
        let (store, _) = stores(&temp_dir);
        let mut user = User::new("u", "p", "n");
        user.budget_limits.set("Food", 100.0);
        user.add_recurring(RecurringTransaction::new(
            "Rent",
            900.0,
            "monthly",
            TransactionKind::Expense,
        ));
        store.save(&user).unwrap();

        assert!(!store.exists("Food").unwrap());
        assert!(!store.exists("Rent").unwrap());
    }

    #[test]
    fn test_update_single_user_matches_fresh_save() {
        let temp_dir = TempDir::new().unwrap();
        let (incremental, fresh) = stores(&temp_dir);
        let mut user = User::new("u", "p", "n");
        incremental.save(&user).unwrap();

        user.add_transaction(food());
        fresh.save(&user).unwrap();
        incremental.update(&user).unwrap();

        assert_eq!(contents(&incremental), contents(&fresh));
    }

    #[test]
    fn test_update_middle_user_leaves_neighbours_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let (incremental, fresh) = stores(&temp_dir);

        let first = User::new("u", "p", "n");
        incremental.save(&first).unwrap();
        fresh.save(&first).unwrap();

        let mut middle = User::new("a", "b", "c");
        incremental.save(&middle).unwrap();
        middle.add_transaction(food());
        fresh.save(&middle).unwrap();

        let last = User::new("d", "e", "f");
        incremental.save(&last).unwrap();
        fresh.save(&last).unwrap();

        incremental.update(&middle).unwrap();

        assert_eq!(contents(&incremental), contents(&fresh));
    }

    #[test]
    fn test_update_without_changes_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let (incremental, fresh) = stores(&temp_dir);
        let user = User::new("u", "p", "n");
        incremental.save(&user).unwrap();
        fresh.save(&user).unwrap();

        incremental.update(&user).unwrap();

        assert_eq!(contents(&incremental), contents(&fresh));
    }

    #[test]
    fn test_update_one_item_in_each_block() {
        let temp_dir = TempDir::new().unwrap();
        let (incremental, fresh) = stores(&temp_dir);
        let mut user = User::new("u", "p", "n");
        user.add_transaction(food());
        user.budget_limits.set("Rent", 1000.0);
        incremental.save(&user).unwrap();

        user.add_transaction(Transaction::new(
            NaiveDate::from_ymd_opt(2024, 4, 3).unwrap(),
            "Paycheck",
            1500.0,
            TransactionKind::Income,
        ));
        user.add_recurring(RecurringTransaction::new(
            "Gym",
            20.0,
            "weekly",
            TransactionKind::Expense,
        ));
        user.budget_limits.set("Food", 300.0);
        fresh.save(&user).unwrap();

        incremental.update(&user).unwrap();

        assert_eq!(contents(&incremental), contents(&fresh));
    }

    #[test]
    fn test_update_after_each_mutation_matches_fresh_save() {
        let temp_dir = TempDir::new().unwrap();
        let (incremental, fresh) = stores(&temp_dir);
        let mut user = User::new("u", "p", "n");
        incremental.save(&user).unwrap();

        user.add_transaction(food());
        incremental.update(&user).unwrap();
        user.budget_limits.set("Food", 50.0);
        incremental.update(&user).unwrap();
        user.add_recurring(RecurringTransaction::new(
            "Rent",
            200.0,
            "monthly",
            TransactionKind::Expense,
        ));
        incremental.update(&user).unwrap();
        user.add_transaction(food());
        incremental.update(&user).unwrap();

        fresh.save(&user).unwrap();
        assert_eq!(contents(&incremental), contents(&fresh));
        assert_eq!(incremental.load("u").unwrap(), Some(user));
    }

    #[test]
    fn test_update_batched_additions_keep_only_newest() {
        let temp_dir = TempDir::new().unwrap();
        let (store, _) = stores(&temp_dir);
        let mut user = User::new("u", "p", "n");
        store.save(&user).unwrap();
        store.save(&User::new("a", "b", "c")).unwrap();
        let before = contents(&store);

        user.add_transaction(food());
        user.add_transaction(food());
        store.update(&user).unwrap();

        // Two rows are missing, so no marker lines up and nothing is inserted
        assert_eq!(contents(&store), before);
        assert!(store.load("u").unwrap().unwrap().transactions.is_empty());
    }

    #[test]
    fn test_update_past_end_of_file_is_decode_error() {
        let temp_dir = TempDir::new().unwrap();
        let (store, _) = stores(&temp_dir);
        let mut user = User::new("u", "p", "n");
        store.save(&user).unwrap();

        user.add_transaction(food());
        user.add_transaction(food());

        assert!(store.update(&user).unwrap_err().is_decode());
    }

    #[test]
    fn test_update_unknown_user_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let (store, _) = stores(&temp_dir);
        store.save(&User::new("u", "p", "n")).unwrap();

        let err = store.update(&User::new("x", "y", "z")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_replace_rewrites_overwritten_limit() {
        let temp_dir = TempDir::new().unwrap();
        let (store, fresh) = stores(&temp_dir);
        let neighbour = User::new("a", "b", "c");
        let mut user = User::new("u", "p", "n");
        user.budget_limits.set("Food", 100.0);
        user.budget_limits.set("Rent", 900.0);
        store.save(&user).unwrap();
        store.save(&neighbour).unwrap();

        user.budget_limits.set("Food", 150.0);
        store.replace(&user).unwrap();

        fresh.save(&user).unwrap();
        fresh.save(&neighbour).unwrap();
        assert_eq!(contents(&store), contents(&fresh));
    }

    #[test]
    fn test_missing_file_operations() {
        let temp_dir = TempDir::new().unwrap();
        let store = UserStore::new(temp_dir.path().join("nested").join("users.txt"));

        assert!(!store.exists("u").unwrap());
        assert_eq!(store.load("u").unwrap(), None);
        assert!(store.update(&User::new("u", "p", "n")).unwrap_err().is_not_found());

        store.save(&User::new("u", "p", "n")).unwrap();
        assert!(store.exists("u").unwrap());
    }
}
