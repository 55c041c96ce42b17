pub mod mock_sms_client;
pub mod twilio_sms_client;

pub use mock_sms_client::MockSmsClient;
pub use twilio_sms_client::TwilioSmsClient;
