use config::{Config, File};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use super::constants::{env::*, prod};
use crate::auth::JwtCodecConfig;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Missing required setting {0}")]
    Missing(&'static str),
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolFinderSettings {
    pub application: ApplicationSettings,
    pub auth: AuthSettings,
    pub email_client: EmailClientSettings,
    pub sms_client: SmsClientSettings,
    pub geocode_client: GeocodeClientSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    pub allowed_origins: AllowedOrigins,
    /// Origin of the web app; email verification links point here.
    pub link_base: String,
}

/// Only the signing secret is configurable. Token lifetime and bcrypt cost are fixed.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt: JwtSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
}

impl JwtSettings {
    pub fn codec_config(&self) -> JwtCodecConfig {
        JwtCodecConfig::new(self.secret.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender: String,
    pub auth_token: Option<Secret<String>>,
    pub timeout_in_millis: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmsClientSettings {
    pub base_url: String,
    pub account_sid: Option<String>,
    pub auth_token: Option<Secret<String>>,
    pub from_number: Option<String>,
    pub timeout_in_millis: u64,
}

impl SmsClientSettings {
    pub fn is_configured(&self) -> bool {
        self.account_sid.is_some() && self.auth_token.is_some() && self.from_number.is_some()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeClientSettings {
    pub base_url: String,
    pub api_key: Secret<String>,
    pub timeout_in_millis: u64,
}

/// Comma separated list of origins allowed by CORS.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }
}

impl From<String> for AllowedOrigins {
    fn from(raw: String) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }
}

impl PoolFinderSettings {
    /// Reads `.env`, then `config/default.json` if present, then the process environment.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_sources(lookup, "config/default")
    }

    fn from_sources<F>(lookup: F, config_file: &str) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret = var(JWT_SECRET_ENV_VAR).ok_or(SettingsError::Missing(JWT_SECRET_ENV_VAR))?;
        let maps_api_key = var(GOOGLE_MAPS_API_KEY_ENV_VAR)
            .ok_or(SettingsError::Missing(GOOGLE_MAPS_API_KEY_ENV_VAR))?;

        let config = Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("application.allowed_origins", prod::ALLOWED_ORIGINS)?
            .set_default("application.link_base", prod::LINK_BASE)?
            .set_default("email_client.base_url", prod::email_client::BASE_URL)?
            .set_default("email_client.sender", prod::email_client::SENDER)?
            .set_default(
                "email_client.timeout_in_millis",
                prod::email_client::TIMEOUT_IN_MILLIS,
            )?
            .set_default("sms_client.base_url", prod::sms_client::BASE_URL)?
            .set_default(
                "sms_client.timeout_in_millis",
                prod::sms_client::TIMEOUT_IN_MILLIS,
            )?
            .set_default("geocode_client.base_url", prod::geocode_client::BASE_URL)?
            .set_default(
                "geocode_client.timeout_in_millis",
                prod::geocode_client::TIMEOUT_IN_MILLIS,
            )?
            .add_source(File::with_name(config_file).required(false))
            .set_override("auth.jwt.secret", jwt_secret)?
            .set_override("geocode_client.api_key", maps_api_key)?
            .set_override_option("application.address", var(APP_ADDRESS_ENV_VAR))?
            .set_override_option("application.allowed_origins", var(ALLOWED_ORIGINS_ENV_VAR))?
            .set_override_option("application.link_base", var(LINK_BASE_ENV_VAR))?
            .set_override_option("email_client.auth_token", var(POSTMARK_AUTH_TOKEN_ENV_VAR))?
            .set_override_option("sms_client.account_sid", var(TWILIO_ACCOUNT_SID_ENV_VAR))?
            .set_override_option("sms_client.auth_token", var(TWILIO_AUTH_TOKEN_ENV_VAR))?
            .set_override_option("sms_client.from_number", var(TWILIO_PHONE_NUMBER_ENV_VAR))?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
