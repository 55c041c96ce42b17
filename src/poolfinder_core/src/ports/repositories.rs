use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{
    credentials::{CredentialRecord, PasswordHash},
    email::Email,
    user::{User, UserId},
    verification::VerificationChannel,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence collaborator for accounts and their password hashes.
///
/// The auth core never talks to a database itself; it only reads a hash back at login
/// and hands a freshly computed one over at registration.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: User, password_hash: PasswordHash)
    -> Result<(), UserStoreError>;
    async fn get_credentials(&self, email: &Email) -> Result<CredentialRecord, UserStoreError>;
    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError>;
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError>;
    async fn mark_verified(
        &self,
        id: &UserId,
        channel: VerificationChannel,
    ) -> Result<(), UserStoreError>;
}

// VerificationStore port trait and errors
#[derive(Debug, Error)]
pub enum VerificationStoreError {
    #[error("No pending verification")]
    NotFound,
    #[error("Verification code expired")]
    Expired,
    #[error("Verification code does not match")]
    Mismatch,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for VerificationStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::NotFound, Self::NotFound)
                | (Self::Expired, Self::Expired)
                | (Self::Mismatch, Self::Mismatch)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Holds outstanding verification secrets until they are redeemed or expire.
///
/// At most one secret is outstanding per user and channel; storing a new one replaces the
/// previous. A secret can be consumed exactly once.
#[async_trait]
pub trait VerificationStore: Send + Sync {
    async fn store(
        &self,
        user_id: &UserId,
        channel: VerificationChannel,
        secret: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), VerificationStoreError>;

    async fn consume(
        &self,
        user_id: &UserId,
        channel: VerificationChannel,
        candidate: &str,
        now: DateTime<Utc>,
    ) -> Result<(), VerificationStoreError>;

    /// Drops the outstanding secret, if any, without redeeming it.
    async fn discard(
        &self,
        user_id: &UserId,
        channel: VerificationChannel,
    ) -> Result<(), VerificationStoreError>;
}
