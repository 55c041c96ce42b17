use std::sync::Arc;

use axum::{Json, extract::State};
use poolfinder_application::{
    ConfirmVerificationUseCase, RequestEmailVerificationUseCase, RequestPhoneVerificationUseCase,
};
use poolfinder_core::{EmailClient, SmsClient, UserStore, VerificationChannel, VerificationStore};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::extractors::CurrentUser;

/// Origin of the web app that serves `/verify-email`.
#[derive(Debug, Clone)]
pub struct VerificationLinkBase(pub Arc<str>);

impl From<&str> for VerificationLinkBase {
    fn from(base: &str) -> Self {
        Self(Arc::from(base))
    }
}

#[derive(Debug, Serialize)]
pub struct VerificationResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmVerificationRequest {
    pub channel: VerificationChannel,
    pub code: String,
}

#[tracing::instrument(name = "Request phone verification", skip_all)]
pub async fn request_phone_verification<U, V, S>(
    State((user_store, verification_store, sms_client)): State<(U, V, S)>,
    caller: CurrentUser,
) -> Result<Json<VerificationResponse>, ApiError>
where
    U: UserStore + Clone,
    V: VerificationStore + Clone,
    S: SmsClient + Clone,
{
    let user_id = caller.user_id()?;

    RequestPhoneVerificationUseCase::new(&user_store, &verification_store, &sms_client)
        .execute(&user_id)
        .await?;

    Ok(Json(VerificationResponse {
        message: "Verification code sent".to_owned(),
    }))
}

#[tracing::instrument(name = "Request email verification", skip_all)]
pub async fn request_email_verification<U, V, E>(
    State((user_store, verification_store, email_client, link_base)): State<(
        U,
        V,
        E,
        VerificationLinkBase,
    )>,
    caller: CurrentUser,
) -> Result<Json<VerificationResponse>, ApiError>
where
    U: UserStore + Clone,
    V: VerificationStore + Clone,
    E: EmailClient + Clone,
{
    let user_id = caller.user_id()?;

    RequestEmailVerificationUseCase::new(
        &user_store,
        &verification_store,
        &email_client,
        &link_base.0,
    )
    .execute(&user_id)
    .await?;

    Ok(Json(VerificationResponse {
        message: "Verification email sent".to_owned(),
    }))
}

#[tracing::instrument(name = "Confirm verification", skip_all)]
pub async fn confirm_verification<U, V>(
    State((user_store, verification_store)): State<(U, V)>,
    caller: CurrentUser,
    Json(request): Json<ConfirmVerificationRequest>,
) -> Result<Json<VerificationResponse>, ApiError>
where
    U: UserStore + Clone,
    V: VerificationStore + Clone,
{
    let user_id = caller.user_id()?;

    ConfirmVerificationUseCase::new(&user_store, &verification_store)
        .execute(&user_id, request.channel, &request.code)
        .await?;

    Ok(Json(VerificationResponse {
        message: format!("{} verified", request.channel),
    }))
}
