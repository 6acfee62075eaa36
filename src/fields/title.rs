use html_escape::encode_text;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::{clean_text, TextRules};
use crate::error::{Result, ValidationError};
use crate::guards::Denylist;

static PLACEHOLDERS: LazyLock<Denylist> = LazyLock::new(Denylist::title);

/// Recipe title, normalized and free of markup
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    pub const MAX_CHARS: usize = 255;

    pub fn new(raw: &str) -> Result<Self> {
        Self::from_bytes(raw.as_bytes())
    }

    /// Build a title from raw bytes, rejecting anything that is not UTF-8
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        Self::with_placeholders(raw, &PLACEHOLDERS)
    }

    pub(crate) fn with_placeholders(raw: &[u8], placeholders: &Denylist) -> Result<Self> {
        let value = clean_text(
            raw,
            &TextRules {
                field: "title",
                min_chars: 1,
                max_chars: Self::MAX_CHARS,
                multiline: true,
                placeholders: Some(placeholders),
            },
        )?;
        Ok(Title(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn equals(&self, other: &Title) -> bool {
        self == other
    }

    /// Title escaped for embedding in HTML text
    pub fn to_html(&self) -> String {
        encode_text(&self.0).into_owned()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Title {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self> {
        Title::new(&value)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}
