use std::fmt;

use serde::Serialize;

use crate::domain::user::UserError;

const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 15;

/// Phone number normalised to E.164 (`+` followed by digits).
///
/// Ten-digit input is taken as a North American number and gets the `+1` country code;
/// anything longer is assumed to already carry its country code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, UserError> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
            return Err(UserError::InvalidPhoneNumber);
        }

        if digits.len() == MIN_DIGITS {
            Ok(Self(format!("+1{digits}")))
        } else {
            Ok(Self(format!("+{digits}")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
