use secrecy::{ExposeSecret, Secret};

use crate::domain::user::UserError;

pub const MIN_PASSWORD_LENGTH: usize = 8;
/// bcrypt only looks at the first 72 bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Plaintext password, alive only for the duration of a request.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let raw = value.expose_secret();
        if raw.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(UserError::InvalidPassword(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        if raw.len() > MAX_PASSWORD_BYTES {
            return Err(UserError::InvalidPassword(format!(
                "password must be at most {MAX_PASSWORD_BYTES} bytes"
            )));
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
