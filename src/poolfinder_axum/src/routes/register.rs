use axum::{Json, extract::State, http::StatusCode};
use poolfinder_application::{RegisterUseCase, Registration};
use poolfinder_core::{CredentialHasher, Email, Password, PhoneNumber, TokenCodec, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::{ApiError, login::TokenResponse};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: Secret<String>,
    pub username: String,
    pub password: Secret<String>,
    pub phone_number: Option<String>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H, C>(
    State((user_store, hasher, codec)): State<(U, H, C)>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError>
where
    U: UserStore + Clone,
    H: CredentialHasher,
    C: TokenCodec,
{
    let registration = Registration {
        email: Email::try_from(request.email)?,
        username: request.username,
        password: Password::try_from(request.password)?,
        phone_number: request
            .phone_number
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(PhoneNumber::parse)
            .transpose()?,
    };

    let session = RegisterUseCase::new(&user_store, &hasher, &codec)
        .execute(registration)
        .await?;

    Ok((StatusCode::CREATED, Json(session.into())))
}
