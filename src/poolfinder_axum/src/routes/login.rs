use axum::{Form, Json, extract::State};
use poolfinder_application::{AuthSession, LoginUseCase};
use poolfinder_core::{CredentialHasher, Email, Password, TokenCodec, UserProfile, UserStore};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use super::ApiError;

/// OAuth2 password-grant style form. `username` carries the email address.
#[derive(Deserialize)]
pub struct TokenRequest {
    pub username: Secret<String>,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: UserProfile,
}

impl From<AuthSession> for TokenResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            access_token: session.access_token.into_string(),
            token_type: "bearer",
            user: session.user.profile(),
        }
    }
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H, C>(
    State((user_store, hasher, codec)): State<(U, H, C)>,
    Form(request): Form<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError>
where
    U: UserStore + Clone,
    H: CredentialHasher,
    C: TokenCodec,
{
    // Malformed input gets the same answer as a wrong password.
    let invalid = || ApiError::Unauthorized("Invalid credentials".to_owned());
    let email = Email::try_from(request.username).map_err(|_| invalid())?;
    let password = Password::try_from(request.password).map_err(|_| invalid())?;

    let session = LoginUseCase::new(&user_store, &hasher, &codec)
        .execute(email, password)
        .await?;

    Ok(Json(session.into()))
}
