use poolfinder_core::{DeliveryError, MessageReceipt, PhoneNumber, SmsClient};
use uuid::Uuid;

/// Stand-in used when Twilio is not configured. Messages are only logged.
#[derive(Debug, Clone, Default)]
pub struct MockSmsClient;

impl MockSmsClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl SmsClient for MockSmsClient {
    async fn send_sms(
        &self,
        recipient: &PhoneNumber,
        body: &str,
    ) -> Result<MessageReceipt, DeliveryError> {
        let message_id = format!("mock-{}", Uuid::new_v4());
        tracing::info!(%recipient, body, %message_id, "sms not sent, no provider configured");
        Ok(MessageReceipt { message_id })
    }
}
