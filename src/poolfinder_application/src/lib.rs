mod credentials;
mod session;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use credentials::{compute_password_hash, verify_password_hash};
pub use session::AuthSession;
pub use use_cases::*;
