//! In-memory store used by the policy tests in place of SQLite. It
//! mirrors the store contract, including constraint failures for
//! duplicate usernames and unknown message authors.

use std::sync::Mutex;

use chirp_db::{AccountStore, MessageStore, StoreError};
use chirp_types::models::{Account, Message};

#[derive(Default)]
pub struct MemStore {
    accounts: Mutex<Vec<Account>>,
    messages: Mutex<Vec<Message>>,
}

impl AccountStore for MemStore {
    fn create_account(&self, username: &str, password: &str) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.username == username) {
            return Err(StoreError::Constraint);
        }
        let account = Account {
            id: accounts.iter().map(|a| a.id).max().unwrap_or(0) + 1,
            username: username.to_string(),
            password: password.to_string(),
        };
        accounts.push(account.clone());
        Ok(account)
    }

    fn account_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.username == username).cloned())
    }

    fn account_by_id(&self, id: i64) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }
}

impl MessageStore for MemStore {
    fn create_message(
        &self,
        posted_by: i64,
        message_text: &str,
        time_posted_epoch: i64,
    ) -> Result<Message, StoreError> {
        // Same referential guard the foreign key provides in SQLite.
        if !self.accounts.lock().unwrap().iter().any(|a| a.id == posted_by) {
            return Err(StoreError::Constraint);
        }
        let mut messages = self.messages.lock().unwrap();
        let message = Message {
            id: messages.iter().map(|m| m.id).max().unwrap_or(0) + 1,
            posted_by,
            message_text: message_text.to_string(),
            time_posted_epoch,
        };
        messages.push(message.clone());
        Ok(message)
    }

    fn all_messages(&self) -> Result<Vec<Message>, StoreError> {
        Ok(self.messages.lock().unwrap().clone())
    }

    fn message_by_id(&self, id: i64) -> Result<Option<Message>, StoreError> {
        let messages = self.messages.lock().unwrap();
        Ok(messages.iter().find(|m| m.id == id).cloned())
    }

    fn messages_by_account(&self, account_id: i64) -> Result<Vec<Message>, StoreError> {
        let messages = self.messages.lock().unwrap();
        Ok(messages
            .iter()
            .filter(|m| m.posted_by == account_id)
            .cloned()
            .collect())
    }

    fn delete_message(&self, id: i64) -> Result<bool, StoreError> {
        let mut messages = self.messages.lock().unwrap();
        let before = messages.len();
        messages.retain(|m| m.id != id);
        Ok(messages.len() < before)
    }

    fn update_message_text(&self, id: i64, message_text: &str) -> Result<bool, StoreError> {
        let mut messages = self.messages.lock().unwrap();
        match messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.message_text = message_text.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
