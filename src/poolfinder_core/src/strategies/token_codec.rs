use std::fmt;

use thiserror::Error;

use crate::domain::identity_claim::IdentityClaim;

/// Why a token was refused. Only ever logged, never shown to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidTokenReason {
    Malformed,
    BadSignature,
    WrongIssuer,
    WrongAudience,
    Expired,
    Unexpected(String),
}

impl fmt::Display for InvalidTokenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidTokenReason::Malformed => f.write_str("malformed"),
            InvalidTokenReason::BadSignature => f.write_str("bad signature"),
            InvalidTokenReason::WrongIssuer => f.write_str("wrong issuer"),
            InvalidTokenReason::WrongAudience => f.write_str("wrong audience"),
            InvalidTokenReason::Expired => f.write_str("expired"),
            InvalidTokenReason::Unexpected(detail) => write!(f, "unexpected: {detail}"),
        }
    }
}

/// The single error kind token verification produces.
///
/// Its `Display` output is identical for every cause, so it is safe to forward to a client;
/// `reason()` keeps the specific cause for logs.
#[derive(Debug, Clone, Error)]
#[error("Invalid or expired token")]
pub struct InvalidTokenError {
    reason: InvalidTokenReason,
}

impl InvalidTokenError {
    pub fn new(reason: InvalidTokenReason) -> Self {
        Self { reason }
    }

    pub fn reason(&self) -> &InvalidTokenReason {
        &self.reason
    }
}

#[derive(Debug, Error)]
pub enum TokenIssueError {
    #[error("Token lifetime is out of range")]
    LifetimeOutOfRange,
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}

/// Signed, compact access token handed to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for AccessToken {
    fn from(s: String) -> Self {
        AccessToken(s)
    }
}

/// Issues and verifies stateless identity tokens.
///
/// Implementations hold the signing secret they were constructed with; nothing is read
/// from ambient global state.
pub trait TokenCodec: Clone + Send + Sync + 'static {
    fn issue(&self, claim: &IdentityClaim) -> Result<AccessToken, TokenIssueError>;

    /// Tampering, malformed input, a foreign issuer or audience and expiry all fail with
    /// the same `InvalidTokenError`. A validly signed claim with an unknown role still
    /// decodes; deciding what that role may do is not the codec's job.
    fn verify(&self, token: &str) -> Result<IdentityClaim, InvalidTokenError>;
}
