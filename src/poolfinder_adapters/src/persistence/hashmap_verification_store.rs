use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use poolfinder_core::{UserId, VerificationChannel, VerificationStore, VerificationStoreError};
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct PendingVerification {
    secret: String,
    expires_at: DateTime<Utc>,
}

/// At most one outstanding code or token per user and channel.
#[derive(Default, Clone)]
pub struct HashMapVerificationStore {
    pending: Arc<RwLock<HashMap<(UserId, VerificationChannel), PendingVerification>>>,
}

impl HashMapVerificationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl VerificationStore for HashMapVerificationStore {
    async fn store(
        &self,
        user_id: &UserId,
        channel: VerificationChannel,
        secret: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), VerificationStoreError> {
        let mut pending = self.pending.write().await;
        pending.insert((*user_id, channel), PendingVerification { secret, expires_at });
        Ok(())
    }

    async fn consume(
        &self,
        user_id: &UserId,
        channel: VerificationChannel,
        candidate: &str,
        now: DateTime<Utc>,
    ) -> Result<(), VerificationStoreError> {
        let mut pending = self.pending.write().await;
        let key = (*user_id, channel);

        let entry = pending.get(&key).ok_or(VerificationStoreError::NotFound)?;
        if now > entry.expires_at {
            pending.remove(&key);
            return Err(VerificationStoreError::Expired);
        }
        if entry.secret != candidate {
            return Err(VerificationStoreError::Mismatch);
        }

        pending.remove(&key);
        Ok(())
    }

    async fn discard(
        &self,
        user_id: &UserId,
        channel: VerificationChannel,
    ) -> Result<(), VerificationStoreError> {
        self.pending.write().await.remove(&(*user_id, channel));
        Ok(())
    }
}
