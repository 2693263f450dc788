use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde_json::json;
use tracing::error;

use chirp_service::ServiceError;

/// Handler-level failure: either a typed policy outcome or an internal
/// fault (e.g. a blocking task that panicked). Status mapping lives here
/// and nowhere else.
pub enum ApiError {
    Service(ServiceError),
    Internal(anyhow::Error),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::Service(err)
    }
}

impl ApiError {
    pub(crate) fn from_join(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(anyhow::anyhow!("blocking task failed: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Service(err) => match &err {
                // Duplicate usernames surface as 400, not 409.
                ServiceError::InvalidInput(_) | ServiceError::Conflict => {
                    (StatusCode::BAD_REQUEST, err.to_string())
                }
                ServiceError::Unauthorized => (StatusCode::UNAUTHORIZED, err.to_string()),
                ServiceError::NotFound => (StatusCode::NOT_FOUND, err.to_string()),
                ServiceError::Storage(cause) => {
                    error!("Storage failure: {cause}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal server error".to_string(),
                    )
                }
            },
            ApiError::Internal(err) => {
                error!("Internal error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirp_db::StoreError;

    fn status_of(err: ServiceError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn service_errors_map_to_the_contract_status_codes() {
        assert_eq!(
            status_of(ServiceError::InvalidInput("bad")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(ServiceError::Conflict), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(ServiceError::Unauthorized),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(ServiceError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(ServiceError::Storage(StoreError::Poisoned)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_faults_map_to_500() {
        let err = ApiError::Internal(anyhow::anyhow!("boom"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
