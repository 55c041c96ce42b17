pub mod auth_chain;
pub mod domain;
pub mod http_abstraction;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    credentials::{CredentialRecord, PasswordHash},
    email::Email,
    geo::{AddressComponent, Bounds, Coordinates, GeoError, GeocodeResult},
    identity_claim::IdentityClaim,
    password::Password,
    phone_number::PhoneNumber,
    role::Role,
    user::{User, UserError, UserId, UserProfile},
    verification::{
        VERIFICATION_TTL_MINUTES, VerificationChannel, VerificationCode, VerificationError,
        VerificationToken, verification_ttl,
    },
};

pub use ports::{
    repositories::{UserStore, UserStoreError, VerificationStore, VerificationStoreError},
    services::{
        DeliveryError, EmailClient, GeocodeClient, GeocodeError, MessageReceipt, SmsClient,
    },
};

pub use strategies::{
    credential_hasher::{CredentialHasher, HashingError},
    role_guard::RoleGuard,
    token_codec::{
        AccessToken, InvalidTokenError, InvalidTokenReason, TokenCodec, TokenIssueError,
    },
};

pub use auth_chain::{AUTHORIZATION_HEADER, AuthRejection, authenticate, bearer_token};
pub use http_abstraction::{AuthRequest, AuthResponseBuilder};
