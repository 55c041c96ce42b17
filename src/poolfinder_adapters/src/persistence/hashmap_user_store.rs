use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use poolfinder_core::{
    CredentialRecord, Email, PasswordHash, User, UserId, UserStore, UserStoreError,
    VerificationChannel,
};

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_hash: PasswordHash,
}

/// In-memory accounts, indexed by id and by email.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<Users>>,
}

#[derive(Default)]
struct Users {
    by_id: HashMap<UserId, StoredUser>,
    id_by_email: HashMap<Email, UserId>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: User, password_hash: PasswordHash) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.id_by_email.contains_key(user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.id_by_email.insert(user.email().clone(), user.id());
        users.by_id.insert(
            user.id(),
            StoredUser {
                user,
                password_hash,
            },
        );
        Ok(())
    }

    async fn get_credentials(&self, email: &Email) -> Result<CredentialRecord, UserStoreError> {
        let users = self.users.read().await;
        let stored = users
            .id_by_email
            .get(email)
            .and_then(|id| users.by_id.get(id))
            .ok_or(UserStoreError::UserNotFound)?;

        Ok(CredentialRecord {
            user: stored.user.clone(),
            password_hash: stored.password_hash.clone(),
        })
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .by_id
            .get(id)
            .map(|stored| stored.user.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn list_users(&self) -> Result<Vec<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.by_id.values().map(|stored| stored.user.clone()).collect())
    }

    async fn mark_verified(
        &self,
        id: &UserId,
        channel: VerificationChannel,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let stored = users.by_id.get_mut(id).ok_or(UserStoreError::UserNotFound)?;
        stored.user.mark_verified(channel);
        Ok(())
    }
}
