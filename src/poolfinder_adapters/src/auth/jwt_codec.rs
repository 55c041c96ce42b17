use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use poolfinder_core::{
    AccessToken, IdentityClaim, InvalidTokenError, InvalidTokenReason, Role, TokenCodec,
    TokenIssueError,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::config::{JWT_AUDIENCE, JWT_ISSUER, token_ttl};

#[derive(Clone)]
pub struct JwtCodecConfig {
    pub secret: Secret<String>,
    pub token_ttl: Duration,
    pub issuer: String,
    pub audience: String,
}

impl JwtCodecConfig {
    /// Seven day tokens for the `pool-finder` issuer and `pool-finder-users` audience.
    pub fn new(secret: Secret<String>) -> Self {
        Self {
            secret,
            token_ttl: token_ttl(),
            issuer: JWT_ISSUER.to_owned(),
            audience: JWT_AUDIENCE.to_owned(),
        }
    }

    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }
}

/// HS256 signed tokens. The secret is fixed at construction.
#[derive(Clone)]
pub struct JwtTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
    issuer: String,
    audience: String,
}

impl JwtTokenCodec {
    pub fn new(config: JwtCodecConfig) -> Self {
        let secret = config.secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            token_ttl: config.token_ttl,
            issuer: config.issuer,
            audience: config.audience,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: String,
    email: String,
    role: String,
    iss: String,
    aud: String,
    iat: u64,
    exp: u64,
}

impl TokenCodec for JwtTokenCodec {
    fn issue(&self, claim: &IdentityClaim) -> Result<AccessToken, TokenIssueError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.token_ttl)
            .ok_or(TokenIssueError::LifetimeOutOfRange)?;

        let claims = Claims {
            id: claim.subject_id.clone(),
            email: claim.email.clone(),
            role: claim.role.as_str().to_owned(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: unix_seconds(now.timestamp())?,
            exp: unix_seconds(expires_at.timestamp())?,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map(AccessToken::from)
            .map_err(|e| TokenIssueError::SigningFailed(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<IdentityClaim, InvalidTokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| InvalidTokenError::new(reason_for(e.kind())))?;

        Ok(IdentityClaim::new(
            claims.id,
            claims.email,
            Role::from(claims.role),
        ))
    }
}

fn unix_seconds(timestamp: i64) -> Result<u64, TokenIssueError> {
    u64::try_from(timestamp).map_err(|_| TokenIssueError::LifetimeOutOfRange)
}

fn reason_for(kind: &ErrorKind) -> InvalidTokenReason {
    match kind {
        ErrorKind::InvalidSignature => InvalidTokenReason::BadSignature,
        ErrorKind::ExpiredSignature => InvalidTokenReason::Expired,
        ErrorKind::InvalidIssuer => InvalidTokenReason::WrongIssuer,
        ErrorKind::InvalidAudience => InvalidTokenReason::WrongAudience,
        ErrorKind::InvalidToken
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::MissingRequiredClaim(_)
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => InvalidTokenReason::Malformed,
        other => InvalidTokenReason::Unexpected(format!("{other:?}")),
    }
}
