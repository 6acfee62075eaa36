mod difficulty;
mod email;
mod ingredients;
mod password;
mod prep_time;
mod title;
mod username;

pub use difficulty::Difficulty;
pub use email::Email;
pub use ingredients::IngredientList;
pub use password::Password;
pub use prep_time::PreparationTime;
pub use title::Title;
pub use username::Username;

use crate::error::{Result, ValidationError};
use crate::guards::{self, Denylist};

/// Rules applied by [`clean_text`] to one text field
pub(crate) struct TextRules<'a> {
    pub field: &'static str,
    pub min_chars: usize,
    pub max_chars: usize,
    pub multiline: bool,
    pub placeholders: Option<&'a Denylist>,
}

/// Shared pipeline for text fields. Returns the value to store.
///
/// Encoding is checked on the raw bytes before anything touches them, and the
/// length bound is measured on the exact string that gets stored.
pub(crate) fn clean_text(raw: &[u8], rules: &TextRules<'_>) -> Result<String> {
    let field = rules.field;

    let text = guards::decode(raw)
        .ok_or_else(|| ValidationError::invalid(field, "must be valid UTF-8"))?;

    // vertical tab and form feed count as whitespace when normalizing, so
    // control characters are checked on the text as received
    if guards::contains_control_chars(text) {
        return Err(ValidationError::invalid(
            field,
            "cannot contain control characters",
        ));
    }

    let normalized = guards::normalize(text);

    if normalized.is_empty() {
        return Err(ValidationError::invalid(field, "cannot be empty"));
    }

    if guards::contains_markup(&normalized) {
        return Err(ValidationError::invalid(field, "cannot contain HTML markup"));
    }

    if !rules.multiline && normalized.contains('\n') {
        return Err(ValidationError::invalid(field, "must be a single line"));
    }

    let chars = normalized.chars().count();
    if chars < rules.min_chars {
        return Err(ValidationError::invalid(
            field,
            format!("must be at least {} characters long", rules.min_chars),
        ));
    }
    if chars > rules.max_chars {
        return Err(ValidationError::invalid(
            field,
            format!("cannot be longer than {} characters", rules.max_chars),
        ));
    }

    if let Some(denylist) = rules.placeholders {
        if guards::is_placeholder(&normalized, denylist) {
            return Err(ValidationError::invalid(
                field,
                "cannot be an empty or placeholder value",
            ));
        }
    }

    Ok(normalized)
}
