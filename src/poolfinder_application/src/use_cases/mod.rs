pub mod confirm_verification;
pub mod current_user;
pub mod list_users;
pub mod login;
pub mod register;
pub mod request_verification;

// Re-export for convenience
pub use confirm_verification::{ConfirmVerificationError, ConfirmVerificationUseCase};
pub use current_user::{CurrentUserError, GetCurrentUserUseCase};
pub use list_users::ListUsersUseCase;
pub use login::{LoginError, LoginUseCase};
pub use register::{RegisterError, RegisterUseCase, Registration};
pub use request_verification::{
    RequestEmailVerificationUseCase, RequestPhoneVerificationUseCase, RequestVerificationError,
    VERIFICATION_EMAIL_SUBJECT, verification_email_body, verification_sms_body,
};
