use html_escape::encode_text;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::{clean_text, TextRules};
use crate::error::{Result, ValidationError};
use crate::guards::Denylist;

static PLACEHOLDERS: LazyLock<Denylist> = LazyLock::new(Denylist::ingredients);

/// Ingredient list, one ingredient per line.
///
/// Line breaks survive normalization; blank lines and repeated spaces do not.
/// `"sin ingredientes"`, `"n/a"` and the other built-in placeholders are
/// rejected however they are spaced or cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IngredientList(String);

impl IngredientList {
    pub const MAX_CHARS: usize = 3000;

    pub fn new(raw: &str) -> Result<Self> {
        Self::from_bytes(raw.as_bytes())
    }

    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        Self::with_placeholders(raw, &PLACEHOLDERS)
    }

    pub(crate) fn with_placeholders(raw: &[u8], placeholders: &Denylist) -> Result<Self> {
        let value = clean_text(
            raw,
            &TextRules {
                field: "ingredients",
                min_chars: 1,
                max_chars: Self::MAX_CHARS,
                multiline: true,
                placeholders: Some(placeholders),
            },
        )?;
        Ok(IngredientList(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// One item per line, in input order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split('\n')
    }

    pub fn equals(&self, other: &IngredientList) -> bool {
        self == other
    }

    /// Escaped list with lines joined by `<br>`
    pub fn to_html(&self) -> String {
        self.lines()
            .map(|line| encode_text(line).into_owned())
            .collect::<Vec<String>>()
            .join("<br>\n")
    }
}

impl fmt::Display for IngredientList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IngredientList {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IngredientList {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self> {
        IngredientList::new(&value)
    }
}

impl From<IngredientList> for String {
    fn from(list: IngredientList) -> Self {
        list.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_line_breaks() {
        let list = IngredientList::new("harina\nazucar").unwrap();
        assert_eq!(list.value(), "harina\nazucar");
        assert_eq!(list.lines().collect::<Vec<_>>(), vec!["harina", "azucar"]);
    }

    #[test]
    fn test_allows_ampersand() {
        let list = IngredientList::new("sal & pimienta").unwrap();
        assert_eq!(list.to_string(), "sal & pimienta");
    }

    #[test]
    fn test_rejects_html_tags() {
        let err = IngredientList::new("<b>azucar</b>").unwrap_err();
        assert_eq!(err.reason(), "cannot contain HTML markup");
    }

    #[test]
    fn test_rejects_placeholder_split_over_lines() {
        assert!(IngredientList::new("sin\n ingredientes").is_err());
    }

    #[test]
    fn test_rejects_every_builtin_placeholder() {
        for value in ["sin ingredientes", "n/a", "ninguno", "-", "none", "na", "null"] {
            assert!(IngredientList::new(value).is_err(), "{value} accepted");
            assert!(IngredientList::new(&value.to_uppercase()).is_err());
        }
    }

    #[test]
    fn test_normalizes_structure() {
        let raw = "  200 g   harina \r\n\r\n\r\n 2\thuevos\r 1 pizca de sal  ";
        let list = IngredientList::new(raw).unwrap();
        assert_eq!(list.value(), "200 g harina\n2 huevos\n1 pizca de sal");
    }

    #[test]
    fn test_rejects_control_chars() {
        assert!(IngredientList::new("harina\u{0}").is_err());
        assert!(IngredientList::new("harina\u{7f}azucar").is_err());

        // vertical tab and form feed are whitespace to the normalizer but
        // still rejected, not folded into a space
        for raw in ["harina\u{0B}azucar", "harina\u{0C}\nazucar"] {
            let err = IngredientList::new(raw).unwrap_err();
            assert_eq!(err.reason(), "cannot contain control characters");
        }
    }

    #[test]
    fn test_length_bound_on_normalized_value() {
        assert!(IngredientList::new(&"a".repeat(3000)).is_ok());
        assert!(IngredientList::new(&"a".repeat(3001)).is_err());

        // well past the bound before normalization, under it afterwards
        let padded = format!("{}{}", "a".repeat(2990), " ".repeat(500));
        assert!(IngredientList::new(&padded).is_ok());
    }

    #[test]
    fn test_html_rendering() {
        let list = IngredientList::new("sal & pimienta\naceite").unwrap();
        assert_eq!(list.to_html(), "sal &amp; pimienta<br>\naceite");
    }
}
