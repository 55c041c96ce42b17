use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::Response,
};
use poolfinder_core::{AuthRejection, IdentityClaim, UserId};

use crate::{adapters::response_builder, routes::ApiError};

/// The identity the `authenticate` middleware attached to this request.
///
/// Only usable on routes behind that middleware; elsewhere extraction fails with 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub IdentityClaim);

impl CurrentUser {
    /// A subject that is not a user id cannot belong to any stored account.
    pub fn user_id(&self) -> Result<UserId, ApiError> {
        UserId::parse(&self.0.subject_id).map_err(|_| ApiError::NotFound("User not found".into()))
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<IdentityClaim>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                tracing::error!("CurrentUser extracted on a route without authenticate");
                AuthRejection::AuthenticationRequired.into_response(response_builder())
            })
    }
}
