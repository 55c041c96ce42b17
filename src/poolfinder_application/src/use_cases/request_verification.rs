use chrono::Utc;
use poolfinder_core::{
    DeliveryError, EmailClient, MessageReceipt, SmsClient, User, UserId, UserStore,
    UserStoreError, VERIFICATION_TTL_MINUTES, VerificationChannel, VerificationCode,
    VerificationStore, VerificationStoreError, VerificationToken, verification_ttl,
};

pub const VERIFICATION_EMAIL_SUBJECT: &str = "Verify your Pool Finder email";

pub fn verification_sms_body(code: &VerificationCode) -> String {
    format!(
        "Your Pool Finder verification code is: {}. This code expires in {VERIFICATION_TTL_MINUTES} minutes.",
        code.as_str()
    )
}

pub fn verification_email_body(link_base: &str, username: &str, token: &VerificationToken) -> String {
    let link = format!(
        "{}/verify-email?token={}",
        link_base.trim_end_matches('/'),
        token.as_str()
    );
    format!(
        "Hi {username},\n\nConfirm your Pool Finder email address by opening the link below:\n\n{link}\n\nThe link expires in {VERIFICATION_TTL_MINUTES} minutes. If you did not create an account you can ignore this message."
    )
}

#[derive(Debug, thiserror::Error)]
pub enum RequestVerificationError {
    #[error("Account has no phone number")]
    NoPhoneNumber,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Verification store error: {0}")]
    VerificationStoreError(#[from] VerificationStoreError),
    #[error("Failed to deliver verification message: {0}")]
    DeliveryError(#[from] DeliveryError),
}

/// Sends a fresh six digit code to the account's phone.
pub struct RequestPhoneVerificationUseCase<'a, U, V, S>
where
    U: UserStore,
    V: VerificationStore,
    S: SmsClient,
{
    user_store: &'a U,
    verification_store: &'a V,
    sms_client: &'a S,
}

impl<'a, U, V, S> RequestPhoneVerificationUseCase<'a, U, V, S>
where
    U: UserStore,
    V: VerificationStore,
    S: SmsClient,
{
    pub fn new(user_store: &'a U, verification_store: &'a V, sms_client: &'a S) -> Self {
        Self {
            user_store,
            verification_store,
            sms_client,
        }
    }

    /// Any previously issued code for the account is replaced.
    #[tracing::instrument(name = "RequestPhoneVerificationUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: &UserId) -> Result<MessageReceipt, RequestVerificationError> {
        let user = self.user_store.get_user(user_id).await?;
        let phone_number = user
            .phone_number()
            .ok_or(RequestVerificationError::NoPhoneNumber)?;

        let code = VerificationCode::generate();
        self.verification_store
            .store(
                user_id,
                VerificationChannel::Sms,
                code.as_str().to_owned(),
                Utc::now() + verification_ttl(),
            )
            .await?;

        let receipt = match self
            .sms_client
            .send_sms(phone_number, &verification_sms_body(&code))
            .await
        {
            Ok(receipt) => receipt,
            Err(e) => {
                // An undelivered code must not stay redeemable.
                self.verification_store
                    .discard(user_id, VerificationChannel::Sms)
                    .await?;
                return Err(e.into());
            }
        };
        tracing::info!(message_id = %receipt.message_id, "verification code sent");

        Ok(receipt)
    }
}

/// Emails a single-use verification link.
pub struct RequestEmailVerificationUseCase<'a, U, V, E>
where
    U: UserStore,
    V: VerificationStore,
    E: EmailClient,
{
    user_store: &'a U,
    verification_store: &'a V,
    email_client: &'a E,
    link_base: &'a str,
}

impl<'a, U, V, E> RequestEmailVerificationUseCase<'a, U, V, E>
where
    U: UserStore,
    V: VerificationStore,
    E: EmailClient,
{
    pub fn new(
        user_store: &'a U,
        verification_store: &'a V,
        email_client: &'a E,
        link_base: &'a str,
    ) -> Self {
        Self {
            user_store,
            verification_store,
            email_client,
            link_base,
        }
    }

    #[tracing::instrument(name = "RequestEmailVerificationUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: &UserId) -> Result<(), RequestVerificationError> {
        let user: User = self.user_store.get_user(user_id).await?;

        let token = VerificationToken::generate();
        self.verification_store
            .store(
                user_id,
                VerificationChannel::Email,
                token.as_str().to_owned(),
                Utc::now() + verification_ttl(),
            )
            .await?;

        let sent = self
            .email_client
            .send_email(
                user.email(),
                VERIFICATION_EMAIL_SUBJECT,
                &verification_email_body(self.link_base, user.username(), &token),
            )
            .await;
        if let Err(e) = sent {
            self.verification_store
                .discard(user_id, VerificationChannel::Email)
                .await?;
            return Err(e.into());
        }

        Ok(())
    }
}
