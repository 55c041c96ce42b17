use chrono::{DateTime, Utc};
use poolfinder_core::{
    UserId, UserStore, UserStoreError, VerificationChannel, VerificationCode, VerificationError,
    VerificationStore, VerificationStoreError, VerificationToken,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfirmVerificationError {
    #[error("{0}")]
    Malformed(#[from] VerificationError),
    #[error("No pending verification")]
    NothingPending,
    #[error("Verification code expired")]
    Expired,
    #[error("Verification code does not match")]
    Mismatch,
    #[error("Verification store error: {0}")]
    VerificationStoreError(String),
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

impl From<VerificationStoreError> for ConfirmVerificationError {
    fn from(e: VerificationStoreError) -> Self {
        match e {
            VerificationStoreError::NotFound => Self::NothingPending,
            VerificationStoreError::Expired => Self::Expired,
            VerificationStoreError::Mismatch => Self::Mismatch,
            VerificationStoreError::UnexpectedError(msg) => Self::VerificationStoreError(msg),
        }
    }
}

/// Checks a submitted code or token and flags the channel as verified on success.
pub struct ConfirmVerificationUseCase<'a, U, V>
where
    U: UserStore,
    V: VerificationStore,
{
    user_store: &'a U,
    verification_store: &'a V,
}

impl<'a, U, V> ConfirmVerificationUseCase<'a, U, V>
where
    U: UserStore,
    V: VerificationStore,
{
    pub fn new(user_store: &'a U, verification_store: &'a V) -> Self {
        Self {
            user_store,
            verification_store,
        }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        channel: VerificationChannel,
        submitted: &str,
    ) -> Result<(), ConfirmVerificationError> {
        self.execute_at(user_id, channel, submitted, Utc::now()).await
    }

    #[tracing::instrument(name = "ConfirmVerificationUseCase::execute", skip(self, submitted))]
    pub async fn execute_at(
        &self,
        user_id: &UserId,
        channel: VerificationChannel,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> Result<(), ConfirmVerificationError> {
        let candidate = match channel {
            VerificationChannel::Sms => VerificationCode::parse(submitted)?.as_str().to_owned(),
            VerificationChannel::Email => VerificationToken::parse(submitted)?.as_str().to_owned(),
        };

        self.verification_store
            .consume(user_id, channel, &candidate, now)
            .await
            .inspect_err(|e| tracing::info!(error = %e, "verification rejected"))?;

        self.user_store.mark_verified(user_id, channel).await?;
        tracing::info!("{channel} verified");

        Ok(())
    }
}
