use rusqlite::{OptionalExtension, Row};

use chirp_types::models::{Account, Message};

use crate::Database;
use crate::store::{AccountStore, MessageStore, StoreError};

impl AccountStore for Database {
    fn create_account(&self, username: &str, password: &str) -> Result<Account, StoreError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO accounts (username, password) VALUES (?1, ?2)",
                (username, password),
            )?;
            Ok(Account {
                id: conn.last_insert_rowid(),
                username: username.to_string(),
                password: password.to_string(),
            })
        })
    }

    fn account_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, username, password FROM accounts WHERE username = ?1",
                    [username],
                    account_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    fn account_by_id(&self, id: i64) -> Result<Option<Account>, StoreError> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, username, password FROM accounts WHERE id = ?1",
                    [id],
                    account_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }
}

impl MessageStore for Database {
    fn create_message(
        &self,
        posted_by: i64,
        message_text: &str,
        time_posted_epoch: i64,
    ) -> Result<Message, StoreError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (posted_by, message_text, time_posted_epoch) VALUES (?1, ?2, ?3)",
                rusqlite::params![posted_by, message_text, time_posted_epoch],
            )?;
            Ok(Message {
                id: conn.last_insert_rowid(),
                posted_by,
                message_text: message_text.to_string(),
                time_posted_epoch,
            })
        })
    }

    fn all_messages(&self) -> Result<Vec<Message>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, posted_by, message_text, time_posted_epoch
                 FROM messages
                 ORDER BY id",
            )?;
            let rows = stmt
                .query_map([], message_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    fn message_by_id(&self, id: i64) -> Result<Option<Message>, StoreError> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, posted_by, message_text, time_posted_epoch
                     FROM messages WHERE id = ?1",
                    [id],
                    message_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    fn messages_by_account(&self, account_id: i64) -> Result<Vec<Message>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, posted_by, message_text, time_posted_epoch
                 FROM messages
                 WHERE posted_by = ?1
                 ORDER BY id",
            )?;
            let rows = stmt
                .query_map([account_id], message_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    fn delete_message(&self, id: i64) -> Result<bool, StoreError> {
        self.with_conn(|conn| {
            let deleted = conn.execute("DELETE FROM messages WHERE id = ?1", [id])?;
            Ok(deleted > 0)
        })
    }

    fn update_message_text(&self, id: i64, message_text: &str) -> Result<bool, StoreError> {
        self.with_conn(|conn| {
            let updated = conn.execute(
                "UPDATE messages SET message_text = ?1 WHERE id = ?2",
                rusqlite::params![message_text, id],
            )?;
            Ok(updated > 0)
        })
    }
}

fn account_from_row(row: &Row) -> rusqlite::Result<Account> {
    Ok(Account {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
    })
}

fn message_from_row(row: &Row) -> rusqlite::Result<Message> {
    Ok(Message {
        id: row.get(0)?,
        posted_by: row.get(1)?,
        message_text: row.get(2)?,
        time_posted_epoch: row.get(3)?,
    })
}
