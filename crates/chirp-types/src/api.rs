use serde::Deserialize;

// -- Accounts --

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// -- Messages --

#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub posted_by: i64,
    pub message_text: String,
}

/// Unknown fields are tolerated and dropped rather than rejected: a PATCH
/// body may carry `posted_by` or `time_posted_epoch`, and those values
/// must be discarded, never applied.
#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub message_text: String,
}
