use axum::{Json, http::StatusCode, response::IntoResponse};
use poolfinder_application::{
    ConfirmVerificationError, CurrentUserError, LoginError, RegisterError,
    RequestVerificationError,
};
use poolfinder_core::{GeoError, GeocodeError, UserError, UserStoreError};
use thiserror::Error;

/// Every route error, rendered as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    BadGateway(String),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Fallback for paths no route matches.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_owned())
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<UserStoreError> for ApiError {
    fn from(e: UserStoreError) -> Self {
        match e {
            UserStoreError::UserAlreadyExists => ApiError::Conflict(e.to_string()),
            UserStoreError::UserNotFound => ApiError::NotFound(e.to_string()),
            UserStoreError::UnexpectedError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<RegisterError> for ApiError {
    fn from(e: RegisterError) -> Self {
        match e {
            RegisterError::InvalidUser(e) => e.into(),
            RegisterError::UserStoreError(e) => e.into(),
            RegisterError::HashingError(_) | RegisterError::TokenIssueError(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(e: LoginError) -> Self {
        match e {
            LoginError::InvalidCredentials => ApiError::Unauthorized(e.to_string()),
            LoginError::UserStoreError(_)
            | LoginError::HashingError(_)
            | LoginError::TokenIssueError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<CurrentUserError> for ApiError {
    fn from(e: CurrentUserError) -> Self {
        match e {
            CurrentUserError::InvalidSubject(_) => ApiError::NotFound("User not found".into()),
            CurrentUserError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<RequestVerificationError> for ApiError {
    fn from(e: RequestVerificationError) -> Self {
        match e {
            RequestVerificationError::NoPhoneNumber => ApiError::BadRequest(e.to_string()),
            RequestVerificationError::UserStoreError(e) => e.into(),
            RequestVerificationError::DeliveryError(_) => ApiError::BadGateway(
                "Failed to send verification message".to_owned(),
            ),
            RequestVerificationError::VerificationStoreError(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<ConfirmVerificationError> for ApiError {
    fn from(e: ConfirmVerificationError) -> Self {
        match e {
            ConfirmVerificationError::Malformed(_)
            | ConfirmVerificationError::NothingPending
            | ConfirmVerificationError::Expired
            | ConfirmVerificationError::Mismatch => ApiError::BadRequest(e.to_string()),
            ConfirmVerificationError::UserStoreError(e) => e.into(),
            ConfirmVerificationError::VerificationStoreError(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<GeoError> for ApiError {
    fn from(e: GeoError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<GeocodeError> for ApiError {
    fn from(e: GeocodeError) -> Self {
        tracing::warn!(error = %e, "geocoding failed");
        ApiError::BadGateway("Geocoding service unavailable".to_owned())
    }
}
