use poolfinder_core::{DeliveryError, Email, EmailClient};

/// Stand-in used when no Postmark token is configured. Messages are only logged.
#[derive(Debug, Clone, Default)]
pub struct MockEmailClient;

impl MockEmailClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl EmailClient for MockEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), DeliveryError> {
        tracing::info!(
            recipient = recipient.as_str(),
            subject,
            content,
            "email not sent, no provider configured"
        );
        Ok(())
    }
}
