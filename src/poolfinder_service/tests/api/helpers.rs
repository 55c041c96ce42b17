use std::sync::{Arc, Mutex};

use poolfinder_adapters::{
    BcryptHasher, GoogleGeocodeClient, HashMapUserStore, HashMapVerificationStore, JwtCodecConfig,
    JwtTokenCodec, config::test,
};
use poolfinder_core::{
    DeliveryError, Email, EmailClient, IdentityClaim, MessageReceipt, PhoneNumber, Role,
    SmsClient, TokenCodec,
};
use poolfinder_service::{PoolFinderService, ServiceComponents};
use secrecy::Secret;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const JWT_SECRET: &str = "integration-test-secret";
pub const LINK_BASE: &str = "https://app.poolfinder.test";
pub const PASSWORD: &str = "correct horse battery";
pub const TOKEN_SUBJECT_ID: &str = "00000000-0000-4000-8000-000000000001";

#[derive(Debug, Clone)]
pub struct SentMessage {
    pub recipient: String,
    pub body: String,
}

/// Keeps every SMS instead of sending it.
#[derive(Clone, Default)]
pub struct RecordingSmsClient {
    pub sent: Arc<Mutex<Vec<SentMessage>>>,
}

#[async_trait::async_trait]
impl SmsClient for RecordingSmsClient {
    async fn send_sms(
        &self,
        recipient: &PhoneNumber,
        body: &str,
    ) -> Result<MessageReceipt, DeliveryError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(SentMessage {
            recipient: recipient.as_str().to_owned(),
            body: body.to_owned(),
        });
        Ok(MessageReceipt {
            message_id: format!("SM{}", sent.len()),
        })
    }
}

/// Keeps every email instead of sending it.
#[derive(Clone, Default)]
pub struct RecordingEmailClient {
    pub sent: Arc<Mutex<Vec<SentMessage>>>,
}

#[async_trait::async_trait]
impl EmailClient for RecordingEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        _subject: &str,
        content: &str,
    ) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push(SentMessage {
            recipient: recipient.as_str().to_owned(),
            body: content.to_owned(),
        });
        Ok(())
    }
}

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub codec: JwtTokenCodec,
    pub sms: RecordingSmsClient,
    pub email: RecordingEmailClient,
    pub geocode_server: MockServer,
}

impl TestApp {
    pub async fn new() -> Self {
        let geocode_server = MockServer::start().await;
        let codec = JwtTokenCodec::new(JwtCodecConfig::new(Secret::new(JWT_SECRET.to_owned())));
        let sms = RecordingSmsClient::default();
        let email = RecordingEmailClient::default();

        let geocode_client = Arc::new(GoogleGeocodeClient::new(
            geocode_server.uri(),
            Secret::new("maps-key".to_owned()),
            reqwest::Client::builder()
                .timeout(test::http_client::TIMEOUT)
                .build()
                .unwrap(),
        ));

        let service = PoolFinderService::new(ServiceComponents {
            user_store: HashMapUserStore::new(),
            verification_store: HashMapVerificationStore::new(),
            hasher: BcryptHasher::with_cost(4),
            codec: codec.clone(),
            email_client: email.clone(),
            sms_client: sms.clone(),
            geocode_client,
            link_base: LINK_BASE.into(),
        });

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            codec,
            sms,
            email,
            geocode_server,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.address)
    }

    /// A token for a subject that need not exist in the store.
    pub fn token_for(&self, role: Role) -> String {
        let claim = IdentityClaim::new(TOKEN_SUBJECT_ID, "someone@example.com", role);
        self.codec.issue(&claim).unwrap().into_string()
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> reqwest::Response {
        let mut request = self.http_client.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.unwrap()
    }

    pub async fn post_json(&self, path: &str, token: Option<&str>, body: &Value) -> reqwest::Response {
        let mut request = self.http_client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.unwrap()
    }

    pub async fn register(&self, body: &Value) -> reqwest::Response {
        self.post_json("/api/auth/register", None, body).await
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.http_client
            .post(self.url("/api/auth/token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .unwrap()
    }

    /// Registers an account and returns its access token.
    pub async fn signed_up(&self, email: &str, phone_number: Option<&str>) -> String {
        let response = self
            .register(&json!({
                "email": email,
                "username": "swimmer",
                "password": PASSWORD,
                "phone_number": phone_number,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);
        let body: Value = response.json().await.unwrap();
        body["access_token"].as_str().unwrap().to_owned()
    }
}

pub async fn error_message(response: reqwest::Response) -> String {
    let body: Value = response.json().await.unwrap();
    body["error"].as_str().unwrap_or_default().to_owned()
}
