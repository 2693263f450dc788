use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use chirp_db::{MessageStore, StoreError};
use chirp_types::models::Message;

use crate::accounts::AccountService;
use crate::error::ServiceError;

const MAX_MESSAGE_LEN: usize = 255;

/// Message validation and CRUD business rules. Author existence is
/// checked through the account policy, not the raw store.
#[derive(Clone)]
pub struct MessageService {
    store: Arc<dyn MessageStore>,
    accounts: AccountService,
}

impl MessageService {
    pub fn new(store: Arc<dyn MessageStore>, accounts: AccountService) -> Self {
        Self { store, accounts }
    }

    /// Create a message stamped with the current wall-clock time.
    pub fn create(&self, posted_by: i64, message_text: &str) -> Result<Message, ServiceError> {
        validate_text(message_text)?;

        // Advisory pre-check for a precise error; the foreign key on
        // messages.posted_by remains the hard guard.
        if !self.accounts.account_exists(posted_by)? {
            return Err(ServiceError::InvalidInput("author account does not exist"));
        }

        let time_posted_epoch = Utc::now().timestamp();
        match self.store.create_message(posted_by, message_text, time_posted_epoch) {
            Ok(message) => {
                info!("Created message {} by account {}", message.id, posted_by);
                Ok(message)
            }
            // The author vanished between check and insert.
            Err(StoreError::Constraint) => {
                Err(ServiceError::InvalidInput("author account does not exist"))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn get_all(&self) -> Result<Vec<Message>, ServiceError> {
        Ok(self.store.all_messages()?)
    }

    /// Absence is a valid result here, not an error; the API layer
    /// decides the status code.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Message>, ServiceError> {
        Ok(self.store.message_by_id(id)?)
    }

    /// Delete a message, returning the deleted record, or `None` as an
    /// idempotent no-op when it was already absent.
    pub fn delete_by_id(&self, id: i64) -> Result<Option<Message>, ServiceError> {
        let Some(message) = self.store.message_by_id(id)? else {
            return Ok(None);
        };
        self.store.delete_message(id)?;
        info!("Deleted message {}", id);
        Ok(Some(message))
    }

    /// Replace the text of an existing message. `posted_by` and
    /// `time_posted_epoch` are immutable: only the text column is
    /// written, whatever the caller supplied alongside it.
    pub fn update(&self, id: i64, new_text: &str) -> Result<Message, ServiceError> {
        validate_text(new_text)?;

        if self.store.message_by_id(id)?.is_none() {
            return Err(ServiceError::NotFound);
        }
        if !self.store.update_message_text(id, new_text)? {
            // Deleted between the existence check and the write.
            return Err(ServiceError::NotFound);
        }

        self.store.message_by_id(id)?.ok_or(ServiceError::NotFound)
    }

    /// Empty is a valid result; an unknown account simply has no messages.
    pub fn get_by_author(&self, account_id: i64) -> Result<Vec<Message>, ServiceError> {
        Ok(self.store.messages_by_account(account_id)?)
    }
}

fn validate_text(text: &str) -> Result<(), ServiceError> {
    if text.trim().is_empty() {
        return Err(ServiceError::InvalidInput("message text cannot be blank"));
    }
    if text.chars().count() > MAX_MESSAGE_LEN {
        return Err(ServiceError::InvalidInput(
            "message text cannot exceed 255 characters",
        ));
    }
    Ok(())
}
