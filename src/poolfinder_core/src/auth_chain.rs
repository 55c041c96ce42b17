//! The per-request authentication pipeline, independent of any web framework.
//!
//! ```text
//! NoAuth ──token present?──▶ Authenticating ──signature+expiry ok?──▶ Authenticated
//!                                                                     │
//!                                                      role permitted?│
//!                                                                     ▼
//!                                                                 Authorized
//! ```
//!
//! Every failed predicate is terminal and maps to exactly one [`AuthRejection`].

use crate::{
    domain::identity_claim::IdentityClaim,
    http_abstraction::{AuthRequest, AuthResponseBuilder},
    strategies::token_codec::{InvalidTokenError, TokenCodec},
};

pub const AUTHORIZATION_HEADER: &str = "authorization";
const BEARER_SCHEME: &str = "bearer";

/// Terminal outcome of a failed stage. Each variant has a fixed status and body.
#[derive(Debug)]
pub enum AuthRejection {
    /// No usable `Authorization: Bearer` header.
    AccessTokenRequired,
    /// The token failed verification. The cause is kept for logging only.
    InvalidToken(InvalidTokenError),
    /// Authorize ran without a preceding authenticate stage.
    AuthenticationRequired,
    /// Valid identity, role not on the route's allow-list.
    InsufficientPermissions,
}

impl AuthRejection {
    pub fn status(&self) -> u16 {
        match self {
            AuthRejection::AccessTokenRequired | AuthRejection::AuthenticationRequired => 401,
            AuthRejection::InvalidToken(_) | AuthRejection::InsufficientPermissions => 403,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AuthRejection::AccessTokenRequired => "Access token required",
            AuthRejection::InvalidToken(_) => "Invalid or expired token",
            AuthRejection::AuthenticationRequired => "Authentication required",
            AuthRejection::InsufficientPermissions => "Insufficient permissions",
        }
    }

    pub fn into_response<B: AuthResponseBuilder>(self, builder: B) -> B::Response {
        builder.error(self.status(), self.message())
    }
}

/// Pull the credential out of an `Authorization` header value.
///
/// The value is split on whitespace; the first field must be the `Bearer` scheme (any
/// case) and the second is the token.
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    let mut parts = header?.split_whitespace();
    let scheme = parts.next()?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }
    parts.next()
}

/// Stage 1: authenticate the request.
///
/// On success the caller attaches the returned claim to the request it is processing and
/// nowhere else.
pub fn authenticate<C, R>(codec: &C, request: &R) -> Result<IdentityClaim, AuthRejection>
where
    C: TokenCodec,
    R: AuthRequest,
{
    let Some(token) = bearer_token(request.header(AUTHORIZATION_HEADER)) else {
        tracing::debug!(
            method = request.method(),
            path = request.path(),
            "request without bearer token"
        );
        return Err(AuthRejection::AccessTokenRequired);
    };

    codec.verify(token).map_err(|error| {
        tracing::warn!(
            method = request.method(),
            path = request.path(),
            reason = %error.reason(),
            "rejected access token"
        );
        AuthRejection::InvalidToken(error)
    })
}
