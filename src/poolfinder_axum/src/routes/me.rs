use axum::{Json, extract::State};
use poolfinder_application::GetCurrentUserUseCase;
use poolfinder_core::{UserProfile, UserStore};

use super::ApiError;
use crate::extractors::CurrentUser;

#[tracing::instrument(name = "Current user", skip_all)]
pub async fn me<U>(
    State(user_store): State<U>,
    CurrentUser(claim): CurrentUser,
) -> Result<Json<UserProfile>, ApiError>
where
    U: UserStore + Clone,
{
    let user = GetCurrentUserUseCase::new(&user_store)
        .execute(&claim)
        .await?;

    Ok(Json(user.profile()))
}
