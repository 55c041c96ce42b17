use std::fmt;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    email::Email, identity_claim::IdentityClaim, phone_number::PhoneNumber, role::Role,
    verification::VerificationChannel,
};

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum UserError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid password: {0}")]
    InvalidPassword(String),
    #[error("Username must be between {MIN_USERNAME_LENGTH} and {MAX_USERNAME_LENGTH} characters")]
    InvalidUsername,
    #[error("Invalid phone number")]
    InvalidPhoneNumber,
    #[error("Invalid user id")]
    InvalidUserId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Result<Self, UserError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserError::InvalidUserId)
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A registered account, without its credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    email: Email,
    username: String,
    role: Role,
    phone_number: Option<PhoneNumber>,
    email_verified: bool,
    phone_verified: bool,
}

impl User {
    /// A brand-new, unverified account.
    pub fn new(
        email: Email,
        username: &str,
        role: Role,
        phone_number: Option<PhoneNumber>,
    ) -> Result<Self, UserError> {
        let username = username.trim();
        let length = username.chars().count();
        if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&length) {
            return Err(UserError::InvalidUsername);
        }

        Ok(Self {
            id: UserId::new(),
            email,
            username: username.to_owned(),
            role,
            phone_number,
            email_verified: false,
            phone_verified: false,
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn phone_number(&self) -> Option<&PhoneNumber> {
        self.phone_number.as_ref()
    }

    pub fn email_verified(&self) -> bool {
        self.email_verified
    }

    pub fn phone_verified(&self) -> bool {
        self.phone_verified
    }

    pub fn mark_verified(&mut self, channel: VerificationChannel) {
        match channel {
            VerificationChannel::Email => self.email_verified = true,
            VerificationChannel::Sms => self.phone_verified = true,
        }
    }

    /// The claim a freshly issued token for this user carries.
    pub fn identity_claim(&self) -> IdentityClaim {
        IdentityClaim::new(
            self.id.to_string(),
            self.email.as_str(),
            self.role.clone(),
        )
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.as_str().to_owned(),
            username: self.username.clone(),
            role: self.role.clone(),
            phone_number: self.phone_number.clone(),
            email_verified: self.email_verified,
            phone_verified: self.phone_verified,
        }
    }
}

/// Public, serialisable view of a `User`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub phone_number: Option<PhoneNumber>,
    pub email_verified: bool,
    pub phone_verified: bool,
}
