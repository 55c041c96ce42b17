use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    geo::{Coordinates, GeocodeResult},
    phone_number::PhoneNumber,
};

/// Failure reported by an email or SMS provider. Callers decide whether to retry.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Delivery provider rejected the message: {0}")]
    Rejected(String),
    #[error("Could not reach delivery provider: {0}")]
    Transport(String),
}

/// Port trait for email sending service
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), DeliveryError>;
}

/// Identifier the SMS provider assigned to an accepted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReceipt {
    pub message_id: String,
}

/// Port trait for SMS sending service
#[async_trait]
pub trait SmsClient: Send + Sync {
    async fn send_sms(
        &self,
        recipient: &PhoneNumber,
        body: &str,
    ) -> Result<MessageReceipt, DeliveryError>;
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Geocoding provider returned status {0}")]
    ProviderStatus(String),
    #[error("Geocoding request failed: {0}")]
    Transport(String),
}

/// Port trait for address <-> coordinate lookups
#[async_trait]
pub trait GeocodeClient: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Option<GeocodeResult>, GeocodeError>;
    async fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<GeocodeResult>, GeocodeError>;
}

// Shared handles forward to the inner client, so `Arc<dyn EmailClient>` etc. can be
// chosen at startup and still satisfy the generic bounds used by routes.

#[async_trait]
impl<T: EmailClient + ?Sized> EmailClient for Arc<T> {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), DeliveryError> {
        (**self).send_email(recipient, subject, content).await
    }
}

#[async_trait]
impl<T: SmsClient + ?Sized> SmsClient for Arc<T> {
    async fn send_sms(
        &self,
        recipient: &PhoneNumber,
        body: &str,
    ) -> Result<MessageReceipt, DeliveryError> {
        (**self).send_sms(recipient, body).await
    }
}

#[async_trait]
impl<T: GeocodeClient + ?Sized> GeocodeClient for Arc<T> {
    async fn geocode(&self, address: &str) -> Result<Option<GeocodeResult>, GeocodeError> {
        (**self).geocode(address).await
    }

    async fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<GeocodeResult>, GeocodeError> {
        (**self).reverse_geocode(coordinates).await
    }
}
