use std::fmt;

use crate::error::{Result, ValidationError};
use crate::guards;

/// Opaque credential, normally a password hash produced upstream.
///
/// The value is never printed; `Debug` shows a redacted marker and there is
/// no `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub const MAX_BYTES: usize = 255;

    pub fn new(hash: impl Into<String>) -> Result<Self> {
        let hash = hash.into();

        if hash.is_empty() {
            return Err(ValidationError::invalid("password", "cannot be empty"));
        }
        if hash.len() > Self::MAX_BYTES {
            return Err(ValidationError::invalid(
                "password",
                format!("cannot be longer than {} bytes", Self::MAX_BYTES),
            ));
        }
        if guards::contains_control_chars(&hash) {
            return Err(ValidationError::invalid(
                "password",
                "cannot contain control characters",
            ));
        }

        Ok(Password(hash))
    }

    /// The stored value, for handing to the credential store
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
