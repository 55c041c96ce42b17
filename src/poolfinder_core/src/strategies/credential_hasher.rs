use thiserror::Error;

use crate::domain::{credentials::PasswordHash, password::Password};

#[derive(Debug, Error)]
pub enum HashingError {
    #[error("Failed to hash password: {0}")]
    HashFailed(String),
    #[error("Password hashing task did not complete: {0}")]
    TaskFailed(String),
}

/// One-way, salted, deliberately slow password transform.
///
/// Both operations are CPU-bound and may take hundreds of milliseconds. They are plain
/// synchronous functions; async callers should move them onto a blocking thread.
pub trait CredentialHasher: Clone + Send + Sync + 'static {
    /// Hash with a freshly generated salt. Hashing the same password twice yields two
    /// different strings.
    fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError>;

    /// `false` for a wrong password and for a stored hash that cannot be parsed.
    fn verify(&self, password: &Password, hash: &PasswordHash) -> bool;
}
