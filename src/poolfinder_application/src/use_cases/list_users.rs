use poolfinder_core::{User, UserStore, UserStoreError};

/// Admin listing of every account, ordered by username.
pub struct ListUsersUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> ListUsersUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "ListUsersUseCase::execute", skip_all)]
    pub async fn execute(&self) -> Result<Vec<User>, UserStoreError> {
        let mut users = self.user_store.list_users().await?;
        users.sort_by(|a, b| a.username().cmp(b.username()));
        Ok(users)
    }
}
