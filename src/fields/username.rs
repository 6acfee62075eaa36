use serde::{Deserialize, Serialize};
use std::fmt;

use super::{clean_text, TextRules};
use crate::error::{Result, ValidationError};

/// Display name of a user account, a single normalized line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub const MIN_CHARS: usize = 3;
    pub const MAX_CHARS: usize = 50;

    pub fn new(raw: &str) -> Result<Self> {
        Self::from_bytes(raw.as_bytes())
    }

    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        let value = clean_text(
            raw,
            &TextRules {
                field: "username",
                min_chars: Self::MIN_CHARS,
                max_chars: Self::MAX_CHARS,
                multiline: false,
                placeholders: None,
            },
        )?;
        Ok(Username(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn equals(&self, other: &Username) -> bool {
        self == other
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self> {
        Username::new(&value)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.0
    }
}
