use std::sync::Arc;

use tracing::info;

use chirp_db::{AccountStore, StoreError};
use chirp_types::models::Account;

use crate::error::ServiceError;

const MIN_PASSWORD_LEN: usize = 4;

/// Account registration, login, and existence checks. Holds its store
/// behind a trait so tests can substitute an in-memory fake.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Register a new account. Exactly one record is written on success,
    /// none on any failure path.
    pub fn register(&self, username: &str, password: &str) -> Result<Account, ServiceError> {
        if username.trim().is_empty() {
            return Err(ServiceError::InvalidInput("username cannot be blank"));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ServiceError::InvalidInput(
                "password must be at least 4 characters",
            ));
        }

        // Advisory pre-check for a fast error; the unique index remains
        // the authoritative guard under concurrent registration.
        if self.store.account_by_username(username)?.is_some() {
            return Err(ServiceError::Conflict);
        }

        match self.store.create_account(username, password) {
            Ok(account) => {
                info!("Registered account {} ({})", account.id, account.username);
                Ok(account)
            }
            // Lost the race against a concurrent insert of the same name.
            Err(StoreError::Constraint) => Err(ServiceError::Conflict),
            Err(err) => Err(err.into()),
        }
    }

    /// Credentials are compared in plain text against the stored value.
    pub fn login(&self, username: &str, password: &str) -> Result<Account, ServiceError> {
        let account = self
            .store
            .account_by_username(username)?
            .ok_or(ServiceError::Unauthorized)?;

        if account.password != password {
            return Err(ServiceError::Unauthorized);
        }

        Ok(account)
    }

    /// Referential-integrity check used by the message policy. Advisory
    /// only; the foreign key on messages is the hard guard.
    pub fn account_exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(self.store.account_by_id(id)?.is_some())
    }
}
