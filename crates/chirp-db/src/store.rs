use chirp_types::models::{Account, Message};
use thiserror::Error;

/// Storage faults, translated at this boundary so callers never match on
/// raw SQLite errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A SQLite constraint rejected the write: the unique index on
    /// `accounts.username`, or the author foreign key on `messages`.
    /// This is the authoritative guard behind the policy layer's
    /// advisory pre-checks.
    #[error("constraint violation")]
    Constraint,

    #[error("database lock poisoned")]
    Poisoned,

    #[error(transparent)]
    Sqlite(rusqlite::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StoreError::Constraint
            }
            other => StoreError::Sqlite(other),
        }
    }
}

/// Account CRUD primitives. Implemented by [`crate::Database`] and by the
/// in-memory fake the policy tests substitute.
pub trait AccountStore: Send + Sync {
    /// Insert a new account, returning it with the generated id.
    /// Fails with [`StoreError::Constraint`] on a duplicate username.
    fn create_account(&self, username: &str, password: &str) -> Result<Account, StoreError>;

    fn account_by_username(&self, username: &str) -> Result<Option<Account>, StoreError>;

    fn account_by_id(&self, id: i64) -> Result<Option<Account>, StoreError>;
}

/// Message CRUD primitives.
pub trait MessageStore: Send + Sync {
    /// Insert a new message, returning it with the generated id.
    /// Fails with [`StoreError::Constraint`] when `posted_by` references
    /// no account.
    fn create_message(
        &self,
        posted_by: i64,
        message_text: &str,
        time_posted_epoch: i64,
    ) -> Result<Message, StoreError>;

    /// All messages in ascending id order.
    fn all_messages(&self) -> Result<Vec<Message>, StoreError>;

    fn message_by_id(&self, id: i64) -> Result<Option<Message>, StoreError>;

    /// Messages posted by one account, ascending id order.
    fn messages_by_account(&self, account_id: i64) -> Result<Vec<Message>, StoreError>;

    /// Returns false when no row had that id. Absence is not an error at
    /// this layer; the policy layer decides what it means.
    fn delete_message(&self, id: i64) -> Result<bool, StoreError>;

    /// Updates only the text column. Returns false when no row had that id.
    fn update_message_text(&self, id: i64, message_text: &str) -> Result<bool, StoreError>;
}
