//! # Pool Finder auth
//!
//! Facade crate that re-exports the public API of the Pool Finder auth components.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `IdentityClaim`, `Role`, etc.
//! - **Strategies**: `CredentialHasher`, `TokenCodec`, `RoleGuard`
//! - **Ports**: `UserStore`, `VerificationStore`, `EmailClient`, `SmsClient`, `GeocodeClient`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, the verification use cases
//! - **Adapters**: `BcryptHasher`, `JwtTokenCodec`, `TwilioSmsClient`, `PostmarkEmailClient`, etc.
//! - **Service**: `PoolFinderService`, the assembled axum router

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use poolfinder_core::*;
}

pub use poolfinder_core::{
    Email, IdentityClaim, Password, PhoneNumber, Role, User, UserError, UserId,
    VerificationChannel, VerificationCode, VerificationToken,
};

// ============================================================================
// Strategies and Ports
// ============================================================================

pub use poolfinder_core::{
    AuthRejection, CredentialHasher, EmailClient, GeocodeClient, RoleGuard, SmsClient,
    TokenCodec, UserStore, UserStoreError, VerificationStore, VerificationStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use poolfinder_application::*;
}

pub use poolfinder_application::{
    ConfirmVerificationUseCase, GetCurrentUserUseCase, ListUsersUseCase, LoginUseCase,
    RegisterUseCase, RequestEmailVerificationUseCase, RequestPhoneVerificationUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Axum middleware, extractors and route handlers
    pub mod http {
        pub use poolfinder_axum::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use poolfinder_adapters::persistence::*;
    }

    /// Outbound messaging
    pub mod messaging {
        pub use poolfinder_adapters::{email::*, sms::*};
    }

    /// Bcrypt hashing and JWT tokens
    pub mod auth {
        pub use poolfinder_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use poolfinder_adapters::config::*;
    }
}

pub use poolfinder_adapters::{
    BcryptHasher, GoogleGeocodeClient, HashMapUserStore, HashMapVerificationStore, JwtCodecConfig,
    JwtTokenCodec, MockEmailClient, MockSmsClient, PoolFinderSettings, PostmarkEmailClient,
    TwilioSmsClient,
};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use poolfinder_service::{PoolFinderService, ServiceComponents};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
