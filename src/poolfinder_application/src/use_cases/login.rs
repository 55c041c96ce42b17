use poolfinder_core::{
    CredentialHasher, Email, HashingError, Password, TokenCodec, TokenIssueError, UserStore,
    UserStoreError,
};

use crate::{
    credentials::{compute_password_hash, verify_password_hash},
    session::AuthSession,
};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("{0}")]
    HashingError(#[from] HashingError),
    #[error("{0}")]
    TokenIssueError(#[from] TokenIssueError),
}

/// Login use case - exchanges email + password for an access token
pub struct LoginUseCase<'a, U, H, C>
where
    U: UserStore,
    H: CredentialHasher,
    C: TokenCodec,
{
    user_store: &'a U,
    hasher: &'a H,
    codec: &'a C,
}

impl<'a, U, H, C> LoginUseCase<'a, U, H, C>
where
    U: UserStore,
    H: CredentialHasher,
    C: TokenCodec,
{
    pub fn new(user_store: &'a U, hasher: &'a H, codec: &'a C) -> Self {
        Self {
            user_store,
            hasher,
            codec,
        }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email, password: Password) -> Result<AuthSession, LoginError> {
        let record = match self.user_store.get_credentials(&email).await {
            Ok(record) => record,
            Err(UserStoreError::UserNotFound) => {
                tracing::debug!("login for unknown email");
                // Same hashing cost as a real comparison, so timing does not reveal accounts.
                compute_password_hash(self.hasher, password).await?;
                return Err(LoginError::InvalidCredentials);
            }
            Err(e) => return Err(LoginError::UserStoreError(e)),
        };

        let matches = verify_password_hash(self.hasher, password, record.password_hash).await?;
        if !matches {
            tracing::info!(user_id = %record.user.id(), "password mismatch");
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self.codec.issue(&record.user.identity_claim())?;

        Ok(AuthSession {
            access_token,
            user: record.user,
        })
    }
}
