use std::fmt;

use chrono::Duration;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long an issued code or link token stays redeemable.
pub const VERIFICATION_TTL_MINUTES: i64 = 10;

const CODE_MIN: u32 = 100_000;
const CODE_MAX: u32 = 999_999;
const TOKEN_FRAGMENT_LENGTH: usize = 13;
const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn verification_ttl() -> Duration {
    Duration::minutes(VERIFICATION_TTL_MINUTES)
}

#[derive(Debug, Error, PartialEq)]
pub enum VerificationError {
    #[error("Verification code must be exactly six digits")]
    InvalidCode,
    #[error("Verification token is malformed")]
    InvalidToken,
}

/// Out-of-band channel a secret was delivered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationChannel {
    Sms,
    Email,
}

impl fmt::Display for VerificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationChannel::Sms => f.write_str("sms"),
            VerificationChannel::Email => f.write_str("email"),
        }
    }
}

/// Six-digit code meant to be typed in by hand (SMS).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Uniform over `100000..=999999`, so there is never a leading zero to lose.
    pub fn generate() -> Self {
        let value = rand::rng().random_range(CODE_MIN..=CODE_MAX);
        Self(value.to_string())
    }

    pub fn parse(raw: &str) -> Result<Self, VerificationError> {
        let trimmed = raw.trim();
        if trimmed.len() != 6 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(VerificationError::InvalidCode);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque token embedded in an email confirmation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationToken(String);

impl VerificationToken {
    /// Two independently drawn base-36 fragments from the thread-local CSPRNG.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let mut token = String::with_capacity(TOKEN_FRAGMENT_LENGTH * 2);
        for _ in 0..2 {
            token.extend((0..TOKEN_FRAGMENT_LENGTH).map(|_| {
                let index = rng.random_range(0..BASE36_ALPHABET.len());
                char::from(BASE36_ALPHABET[index])
            }));
        }
        Self(token)
    }

    pub fn parse(raw: &str) -> Result<Self, VerificationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(VerificationError::InvalidToken);
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
