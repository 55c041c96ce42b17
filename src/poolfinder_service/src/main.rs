use std::{sync::Arc, time::Duration};

use color_eyre::eyre::{Result, eyre};
use poolfinder_adapters::{
    BcryptHasher, GoogleGeocodeClient, HashMapUserStore, HashMapVerificationStore, JwtTokenCodec,
    MockEmailClient, MockSmsClient, PoolFinderSettings, PostmarkEmailClient, TwilioSmsClient,
};
use poolfinder_core::{Email, EmailClient, PhoneNumber, SmsClient};
use poolfinder_service::{PoolFinderService, ServiceComponents, telemetry::init_tracing};
use reqwest::Client as HttpClient;
use secrecy::Secret;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = PoolFinderSettings::load()?;

    let codec = JwtTokenCodec::new(settings.auth.jwt.codec_config());
    let hasher = BcryptHasher::new();

    let email_client: Arc<dyn EmailClient> = match settings.email_client.auth_token.clone() {
        Some(auth_token) => {
            let http_client = HttpClient::builder()
                .timeout(Duration::from_millis(settings.email_client.timeout_in_millis))
                .build()?;
            Arc::new(PostmarkEmailClient::new(
                settings.email_client.base_url.clone(),
                Email::try_from(Secret::new(settings.email_client.sender.clone()))?,
                auth_token,
                http_client,
            ))
        }
        None => {
            tracing::warn!("POSTMARK_AUTH_TOKEN not set, verification emails will only be logged");
            Arc::new(MockEmailClient::new())
        }
    };

    let sms = &settings.sms_client;
    let sms_client: Arc<dyn SmsClient> =
        match (&sms.account_sid, &sms.auth_token, &sms.from_number) {
            (Some(account_sid), Some(auth_token), Some(from_number)) => {
                let http_client = HttpClient::builder()
                    .timeout(Duration::from_millis(sms.timeout_in_millis))
                    .build()?;
                Arc::new(TwilioSmsClient::new(
                    sms.base_url.clone(),
                    account_sid.clone(),
                    auth_token.clone(),
                    PhoneNumber::parse(from_number)?,
                    http_client,
                ))
            }
            _ => {
                tracing::warn!("Twilio is not configured, verification texts will only be logged");
                Arc::new(MockSmsClient::new())
            }
        };

    let geocode_http_client = HttpClient::builder()
        .timeout(Duration::from_millis(
            settings.geocode_client.timeout_in_millis,
        ))
        .build()?;
    let geocode_client = Arc::new(GoogleGeocodeClient::new(
        settings.geocode_client.base_url.clone(),
        settings.geocode_client.api_key.clone(),
        geocode_http_client,
    ));

    let service = PoolFinderService::new(ServiceComponents {
        user_store: HashMapUserStore::new(),
        verification_store: HashMapVerificationStore::new(),
        hasher,
        codec,
        email_client,
        sms_client,
        geocode_client,
        link_base: settings.application.link_base.as_str().into(),
    });

    let listener = tokio::net::TcpListener::bind(&settings.application.address)
        .await
        .map_err(|e| eyre!("Failed to bind {}: {e}", settings.application.address))?;

    service
        .run_standalone(listener, Some(settings.application.allowed_origins))
        .await?;

    Ok(())
}
