use axum::{Json, extract::State};
use poolfinder_application::ListUsersUseCase;
use poolfinder_core::{IdentityClaim, UserProfile, UserStore};
use serde::Serialize;

use super::ApiError;
use crate::extractors::CurrentUser;

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserProfile>,
    pub requested_by: IdentityClaim,
}

#[tracing::instrument(name = "List users", skip_all, fields(admin = %caller.0.subject_id))]
pub async fn list_users<U>(
    State(user_store): State<U>,
    caller: CurrentUser,
) -> Result<Json<UserListResponse>, ApiError>
where
    U: UserStore + Clone,
{
    let users = ListUsersUseCase::new(&user_store).execute().await?;

    Ok(Json(UserListResponse {
        users: users.iter().map(|user| user.profile()).collect(),
        requested_by: caller.0,
    }))
}
