use std::collections::HashSet;

use crate::{
    auth_chain::AuthRejection,
    domain::{identity_claim::IdentityClaim, role::Role},
};

/// Stage 2 of the auth chain: a per-route allow-list of roles.
///
/// Built once when the route is registered and shared, read-only, by every request on
/// that route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGuard {
    allowed: HashSet<Role>,
}

impl RoleGuard {
    /// Unrecognized roles are dropped from the allow-list.
    pub fn allow(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed: roles.into_iter().filter(Role::is_recognized).collect(),
        }
    }

    pub fn permits(&self, role: &Role) -> bool {
        role.is_recognized() && self.allowed.contains(role)
    }

    /// `identity` is whatever the authenticate stage attached, if it ran at all.
    pub fn check(&self, identity: Option<&IdentityClaim>) -> Result<(), AuthRejection> {
        let Some(identity) = identity else {
            tracing::error!("authorize stage ran without an authenticated identity");
            return Err(AuthRejection::AuthenticationRequired);
        };

        if !self.permits(&identity.role) {
            tracing::info!(
                subject = %identity.subject_id,
                role = %identity.role,
                "role not permitted on this route"
            );
            return Err(AuthRejection::InsufficientPermissions);
        }

        Ok(())
    }
}
