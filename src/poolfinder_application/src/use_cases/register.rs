use poolfinder_core::{
    CredentialHasher, Email, HashingError, Password, PhoneNumber, Role, TokenCodec,
    TokenIssueError, User, UserError, UserStore, UserStoreError,
};

use crate::{credentials::compute_password_hash, session::AuthSession};

/// Everything a new account needs, already parsed into domain types.
#[derive(Debug)]
pub struct Registration {
    pub email: Email,
    pub username: String,
    pub password: Password,
    pub phone_number: Option<PhoneNumber>,
}

/// Error types specific to register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("{0}")]
    InvalidUser(#[from] UserError),
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("{0}")]
    HashingError(#[from] HashingError),
    #[error("{0}")]
    TokenIssueError(#[from] TokenIssueError),
}

/// Register use case - creates an account and signs the caller in
pub struct RegisterUseCase<'a, U, H, C>
where
    U: UserStore,
    H: CredentialHasher,
    C: TokenCodec,
{
    user_store: &'a U,
    hasher: &'a H,
    codec: &'a C,
}

impl<'a, U, H, C> RegisterUseCase<'a, U, H, C>
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

    /// New accounts always start with the `USER` role.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(&self, registration: Registration) -> Result<AuthSession, RegisterError> {
        let user = User::new(
            registration.email,
            &registration.username,
            Role::User,
            registration.phone_number,
        )?;

        let password_hash = compute_password_hash(self.hasher, registration.password).await?;
        self.user_store.add_user(user.clone(), password_hash).await?;

        let access_token = self.codec.issue(&user.identity_claim())?;
        tracing::info!(user_id = %user.id(), "registered new account");

        Ok(AuthSession { access_token, user })
    }
}
