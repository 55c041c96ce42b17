pub mod auth;
pub mod config;
pub mod email;
pub mod geocode;
pub mod persistence;
pub mod sms;

pub use auth::{BcryptHasher, JwtCodecConfig, JwtTokenCodec};
pub use config::{AllowedOrigins, PoolFinderSettings, SettingsError};
pub use email::{MockEmailClient, PostmarkEmailClient};
pub use geocode::GoogleGeocodeClient;
pub use persistence::{HashMapUserStore, HashMapVerificationStore};
pub use sms::{MockSmsClient, TwilioSmsClient};
