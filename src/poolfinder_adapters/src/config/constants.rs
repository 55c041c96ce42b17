pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const APP_ADDRESS_ENV_VAR: &str = "POOLFINDER_ADDRESS";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "CORS_ORIGIN";
    pub const LINK_BASE_ENV_VAR: &str = "POOLFINDER_LINK_BASE";
    pub const POSTMARK_AUTH_TOKEN_ENV_VAR: &str = "POSTMARK_AUTH_TOKEN";
    pub const TWILIO_ACCOUNT_SID_ENV_VAR: &str = "TWILIO_ACCOUNT_SID";
    pub const TWILIO_AUTH_TOKEN_ENV_VAR: &str = "TWILIO_AUTH_TOKEN";
    pub const TWILIO_PHONE_NUMBER_ENV_VAR: &str = "TWILIO_PHONE_NUMBER";
    pub const GOOGLE_MAPS_API_KEY_ENV_VAR: &str = "GOOGLE_MAPS_API_KEY";
}

pub const JWT_ISSUER: &str = "pool-finder";
pub const JWT_AUDIENCE: &str = "pool-finder-users";
pub const JWT_TTL_DAYS: i64 = 7;
pub const BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

pub fn token_ttl() -> chrono::Duration {
    chrono::Duration::days(JWT_TTL_DAYS)
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3001";
    pub const ALLOWED_ORIGINS: &str = "http://localhost:3000";
    pub const LINK_BASE: &str = "http://localhost:3000";

    pub mod email_client {
        pub const BASE_URL: &str = "https://api.postmarkapp.com/";
        pub const SENDER: &str = "no-reply@poolfinder.app";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }

    pub mod sms_client {
        pub const BASE_URL: &str = "https://api.twilio.com/";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }

    pub mod geocode_client {
        pub const BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";

    pub mod http_client {
        use std::time::Duration;

        pub const TIMEOUT: Duration = Duration::from_millis(200);
    }
}
