use chirp_db::StoreError;
use thiserror::Error;

/// Typed policy outcomes. The API layer maps these to status codes and
/// does no validation of its own.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or out-of-range request data, including an unknown
    /// message author.
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("username is already taken")]
    Conflict,

    #[error("invalid username or password")]
    Unauthorized,

    #[error("message does not exist")]
    NotFound,

    /// Backing-store fault. Never retried; propagated for logging at the
    /// API boundary.
    #[error("storage failure")]
    Storage(#[source] StoreError),
}

/// Covers the plain propagation case. Create paths that need to translate
/// a racing [`StoreError::Constraint`] match on it explicitly before
/// reaching this conversion.
impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Storage(err)
    }
}
