//! In-memory fakes shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use poolfinder_core::{
    AccessToken, CredentialHasher, CredentialRecord, DeliveryError, Email, EmailClient,
    HashingError, IdentityClaim, InvalidTokenError, InvalidTokenReason, MessageReceipt, Password,
    PasswordHash, PhoneNumber, SmsClient, TokenCodec, TokenIssueError, User, UserId, UserStore,
    UserStoreError, VerificationChannel, VerificationStore, VerificationStoreError,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

pub fn email(raw: &str) -> Email {
    Email::try_from(Secret::new(raw.to_owned())).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::new(raw.to_owned())).unwrap()
}

/// Reversible "hash" with a per-call salt, so equal passwords still hash differently.
#[derive(Clone, Default)]
pub struct FakeHasher {
    counter: Arc<AtomicU64>,
}

impl FakeHasher {
    pub fn hash_calls(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl CredentialHasher for FakeHasher {
    fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError> {
        let salt = self.counter.fetch_add(1, Ordering::Relaxed);
        Ok(PasswordHash::new(format!(
            "{salt}${}",
            password.as_ref().expose_secret()
        )))
    }

    fn verify(&self, password: &Password, hash: &PasswordHash) -> bool {
        hash.as_str()
            .split_once('$')
            .is_some_and(|(_, plain)| plain == password.as_ref().expose_secret())
    }
}

/// Token is just `subject|email|role`.
#[derive(Clone, Default)]
pub struct FakeCodec;

impl TokenCodec for FakeCodec {
    fn issue(&self, claim: &IdentityClaim) -> Result<AccessToken, TokenIssueError> {
        Ok(AccessToken::from(format!(
            "{}|{}|{}",
            claim.subject_id, claim.email, claim.role
        )))
    }

    fn verify(&self, token: &str) -> Result<IdentityClaim, InvalidTokenError> {
        let mut parts = token.split('|');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(id), Some(email), Some(role)) => {
                Ok(IdentityClaim::new(id, email, role.to_owned().into()))
            }
            _ => Err(InvalidTokenError::new(InvalidTokenReason::Malformed)),
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeUserStore {
    users: Arc<RwLock<HashMap<UserId, (User, PasswordHash)>>>,
}

#[async_trait::async_trait]
impl UserStore for FakeUserStore {
    async fn add_user(
        &self,
        user: User,
        password_hash: PasswordHash,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|(u, _)| u.email() == user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.id(), (user, password_hash));
        Ok(())
    }

    async fn get_credentials(&self, email: &Email) -> Result<CredentialRecord, UserStoreError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|(u, _)| u.email() == email)
            .map(|(user, hash)| CredentialRecord {
                user: user.clone(),
                password_hash: hash.clone(),
            })
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .get(id)
            .map(|(user, _)| user.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn list_users(&self) -> Result<Vec<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.values().map(|(user, _)| user.clone()).collect())
    }

    async fn mark_verified(
        &self,
        id: &UserId,
        channel: VerificationChannel,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let (user, _) = users.get_mut(id).ok_or(UserStoreError::UserNotFound)?;
        user.mark_verified(channel);
        Ok(())
    }
}

type PendingSecret = (String, DateTime<Utc>);

#[derive(Clone, Default)]
pub struct FakeVerificationStore {
    pending: Arc<RwLock<HashMap<(UserId, VerificationChannel), PendingSecret>>>,
}

impl FakeVerificationStore {
    pub async fn pending(&self, user_id: &UserId, channel: VerificationChannel) -> Option<String> {
        let pending = self.pending.read().await;
        pending
            .get(&(*user_id, channel))
            .map(|(secret, _)| secret.clone())
    }
}

#[async_trait::async_trait]
impl VerificationStore for FakeVerificationStore {
    async fn store(
        &self,
        user_id: &UserId,
        channel: VerificationChannel,
        secret: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), VerificationStoreError> {
        let mut pending = self.pending.write().await;
        pending.insert((*user_id, channel), (secret, expires_at));
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
        let Some((secret, expires_at)) = pending.get(&key) else {
            return Err(VerificationStoreError::NotFound);
        };
        if now > *expires_at {
            pending.remove(&key);
            return Err(VerificationStoreError::Expired);
        }
        if secret != candidate {
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

#[derive(Clone, Default)]
pub struct RecordingSmsClient {
    pub sent: Arc<RwLock<Vec<(PhoneNumber, String)>>>,
    pub fail: bool,
}

#[async_trait::async_trait]
impl SmsClient for RecordingSmsClient {
    async fn send_sms(
        &self,
        recipient: &PhoneNumber,
        body: &str,
    ) -> Result<MessageReceipt, DeliveryError> {
        if self.fail {
            return Err(DeliveryError::Rejected("carrier refused".to_owned()));
        }
        let mut sent = self.sent.write().await;
        sent.push((recipient.clone(), body.to_owned()));
        Ok(MessageReceipt {
            message_id: format!("SM{}", sent.len()),
        })
    }
}

#[derive(Clone, Default)]
pub struct RecordingEmailClient {
    pub sent: Arc<RwLock<Vec<(String, String, String)>>>,
    pub fail: bool,
}

#[async_trait::async_trait]
impl EmailClient for RecordingEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), DeliveryError> {
        if self.fail {
            return Err(DeliveryError::Rejected("mailbox unavailable".to_owned()));
        }
        let mut sent = self.sent.write().await;
        sent.push((
            recipient.as_str().to_owned(),
            subject.to_owned(),
            content.to_owned(),
        ));
        Ok(())
    }
}
