use poolfinder_core::{AccessToken, User};

/// Result of a successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: AccessToken,
    pub user: User,
}
