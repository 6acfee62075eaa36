use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::error::{Result, ValidationError};
use crate::guards;

/// Dot-atom local part, then a domain of at least two labels
static ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@",
        r"(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$",
    ))
    .expect("email pattern is a valid regex")
});

const MAX_LOCAL_PART: usize = 64;

/// Email address.
///
/// Upper-case input is rejected rather than folded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MAX_CHARS: usize = 255;

    pub fn new(raw: &str) -> Result<Self> {
        // ASCII whitespace only; a non-breaking space is not trimmed and
        // fails the grammar
        let email =
            raw.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\u{0B}'));

        if email.is_empty() {
            return Err(ValidationError::invalid("email", "cannot be empty"));
        }

        if email.to_lowercase() != email {
            return Err(ValidationError::invalid("email", "must be lowercase"));
        }

        if !is_well_formed(email) {
            return Err(ValidationError::invalid("email", "is not a valid address"));
        }

        if email.chars().count() > Self::MAX_CHARS {
            return Err(ValidationError::invalid(
                "email",
                format!("cannot be longer than {} characters", Self::MAX_CHARS),
            ));
        }

        Ok(Email(email.to_string()))
    }

    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        let text = guards::decode(raw)
            .ok_or_else(|| ValidationError::invalid("email", "must be valid UTF-8"))?;
        Self::new(text)
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Part after the `@`
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map(|(_, domain)| domain).unwrap_or_default()
    }

    pub fn equals(&self, other: &Email) -> bool {
        self == other
    }
}

fn is_well_formed(email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    local.len() <= MAX_LOCAL_PART && ADDRESS.is_match(email)
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self> {
        Email::new(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
