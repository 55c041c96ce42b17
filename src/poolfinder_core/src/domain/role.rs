use std::fmt;

use serde::{Deserialize, Serialize};

/// Access role carried in every identity claim.
///
/// The set of roles is closed. A role string this build does not know (for example one
/// minted by a newer deployment sharing the secret) decodes to `Unrecognized` so token
/// decoding keeps working; authorization never grants anything to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    PoolOwner,
    Admin,
    Unrecognized(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "USER",
            Role::PoolOwner => "POOL_OWNER",
            Role::Admin => "ADMIN",
            Role::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Role::Unrecognized(_))
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "USER" => Role::User,
            "POOL_OWNER" => Role::PoolOwner,
            "ADMIN" => Role::Admin,
            _ => Role::Unrecognized(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Unrecognized(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
