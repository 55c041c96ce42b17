use secrecy::{ExposeSecret, Secret};

use crate::domain::user::User;

/// Output of the credential hasher. Only this ever reaches storage.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(hash: String) -> Self {
        Self(Secret::new(hash))
    }

    pub fn as_str(&self) -> &str {
        self.0.expose_secret()
    }
}

/// What the persistence collaborator hands back for a login attempt.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub user: User,
    pub password_hash: PasswordHash,
}
