use poolfinder_core::{DeliveryError, MessageReceipt, PhoneNumber, SmsClient};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

pub struct TwilioSmsClient {
    http_client: Client,
    base_url: String,
    account_sid: String,
    auth_token: Secret<String>,
    from_number: PhoneNumber,
}

impl TwilioSmsClient {
    pub fn new(
        base_url: String,
        account_sid: String,
        auth_token: Secret<String>,
        from_number: PhoneNumber,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            account_sid,
            auth_token,
            from_number,
        }
    }

    fn messages_url(&self) -> Result<Url, DeliveryError> {
        let base = Url::parse(&self.base_url).map_err(|e| DeliveryError::Transport(e.to_string()))?;
        base.join(&format!(
            "/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        ))
        .map_err(|e| DeliveryError::Transport(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct TwilioError {
    message: String,
}

#[async_trait::async_trait]
impl SmsClient for TwilioSmsClient {
    #[tracing::instrument(name = "Sending SMS", skip_all)]
    async fn send_sms(
        &self,
        recipient: &PhoneNumber,
        body: &str,
    ) -> Result<MessageReceipt, DeliveryError> {
        let form = [
            ("To", recipient.as_str()),
            ("From", self.from_number.as_str()),
            ("Body", body),
        ];

        let response = self
            .http_client
            .post(self.messages_url()?)
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&form)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<TwilioError>()
                .await
                .map(|e| e.message)
                .unwrap_or_else(|_| status.to_string());
            tracing::warn!(%status, %detail, "twilio rejected message");
            return Err(DeliveryError::Rejected(detail));
        }

        let message = response
            .json::<MessageResource>()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        Ok(MessageReceipt {
            message_id: message.sid,
        })
    }
}
