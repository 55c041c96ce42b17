//! Axum route handlers.
//!
//! Handlers are generic over the ports they need and take them from router state as a
//! tuple; protected handlers read the caller through [`crate::CurrentUser`].

pub mod admin;
pub mod error;
pub mod geocode;
pub mod health;
pub mod login;
pub mod me;
pub mod register;
pub mod verification;

pub use admin::list_users;
pub use error::ApiError;
pub use geocode::{bounds, geocode, reverse_geocode};
pub use health::health;
pub use login::{TokenResponse, login};
pub use me::me;
pub use register::register;
pub use verification::{
    VerificationLinkBase, confirm_verification, request_email_verification,
    request_phone_verification,
};
