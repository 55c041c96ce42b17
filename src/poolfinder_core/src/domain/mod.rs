pub mod credentials;
pub mod email;
pub mod geo;
pub mod identity_claim;
pub mod password;
pub mod phone_number;
pub mod role;
pub mod user;
pub mod verification;
