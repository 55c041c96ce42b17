use poolfinder_core::{IdentityClaim, User, UserError, UserId, UserStore, UserStoreError};

#[derive(Debug, thiserror::Error)]
pub enum CurrentUserError {
    #[error("Token subject is not a user id")]
    InvalidSubject(#[from] UserError),
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Resolves an authenticated identity back to the stored account.
pub struct GetCurrentUserUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> GetCurrentUserUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "GetCurrentUserUseCase::execute", skip(self, claim), fields(subject = %claim.subject_id))]
    pub async fn execute(&self, claim: &IdentityClaim) -> Result<User, CurrentUserError> {
        let user_id = UserId::parse(&claim.subject_id)?;
        Ok(self.user_store.get_user(&user_id).await?)
    }
}
