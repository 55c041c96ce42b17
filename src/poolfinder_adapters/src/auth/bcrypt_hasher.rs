use poolfinder_core::{CredentialHasher, HashingError, Password, PasswordHash};
use secrecy::ExposeSecret;

use crate::config::BCRYPT_COST;

/// bcrypt with a per-hash random salt embedded in the output (`$2b$<cost>$...`).
///
/// Hashes written at any cost verify, so the work factor can be raised without
/// invalidating stored credentials.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self { cost: BCRYPT_COST }
    }

    /// Costs below 4 or above 31 are rejected by `hash`.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher for BcryptHasher {
    fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError> {
        bcrypt::hash(password.as_ref().expose_secret(), self.cost)
            .map(PasswordHash::new)
            .map_err(|e| HashingError::HashFailed(e.to_string()))
    }

    fn verify(&self, password: &Password, hash: &PasswordHash) -> bool {
        match bcrypt::verify(password.as_ref().expose_secret(), hash.as_str()) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(error = %e, "stored password hash could not be parsed");
                false
            }
        }
    }
}
