use serde::Serialize;

use crate::domain::role::Role;

/// The identity asserted by a verified access token.
///
/// Built fresh for every request by the authenticate stage and dropped with the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityClaim {
    #[serde(rename = "id")]
    pub subject_id: String,
    pub email: String,
    pub role: Role,
}

impl IdentityClaim {
    pub fn new(subject_id: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            subject_id: subject_id.into(),
            email: email.into(),
            role,
        }
    }
}
