//! Storage layer for FinPal
//!
//! All users live in one flat text file: a sequence of records written by
//! [`codec`] and managed by [`UserStore`]. Whole-file rewrites use the atomic
//! helpers in [`file_io`].

pub mod codec;
pub mod file_io;
pub mod users;

pub use codec::{decode_user, encode_user};
pub use users::UserStore;

use crate::config::{paths::FinpalPaths, settings::Settings};

/// Open the user store configured by `settings` under `paths`
pub fn open_user_store(paths: &FinpalPaths, settings: &Settings) -> UserStore {
    UserStore::new(paths.data_file(&settings.data_file_name))
}
