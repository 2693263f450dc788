use serde::{Deserialize, Serialize};

/// A registered user identity. Serialized flat, including the stored
/// password: credentials are held and compared in plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// A single posted text item attributed to an Account.
/// `posted_by` and `time_posted_epoch` are fixed at creation and never
/// change afterwards; only `message_text` is mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub posted_by: i64,
    pub message_text: String,
    pub time_posted_epoch: i64,
}
