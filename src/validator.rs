use log::info;

use crate::config::ValidationConfig;
use crate::error::Result;
use crate::fields::{IngredientList, Title};
use crate::guards::Denylist;

/// Builds text fields against denylists extended from configuration.
///
/// With the default configuration this behaves exactly like `Title::new` and
/// `IngredientList::new`.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    title_placeholders: Denylist,
    ingredient_placeholders: Denylist,
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self {
            title_placeholders: Denylist::title(),
            ingredient_placeholders: Denylist::ingredients(),
        }
    }
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        let mut validator = Self::default();

        let extra = &config.placeholders;
        validator.title_placeholders.extend(&extra.title);
        validator.ingredient_placeholders.extend(&extra.ingredients);

        if !extra.title.is_empty() || !extra.ingredients.is_empty() {
            info!(
                "Placeholder denylists extended: {} title, {} ingredient entries",
                validator.title_placeholders.len(),
                validator.ingredient_placeholders.len()
            );
        }

        validator
    }

    /// Accepts `&str` or raw bytes; bytes are checked for UTF-8 first
    pub fn title(&self, raw: impl AsRef<[u8]>) -> Result<Title> {
        Title::with_placeholders(raw.as_ref(), &self.title_placeholders)
    }

    pub fn ingredients(&self, raw: impl AsRef<[u8]>) -> Result<IngredientList> {
        IngredientList::with_placeholders(raw.as_ref(), &self.ingredient_placeholders)
    }

    pub fn title_placeholders(&self) -> &Denylist {
        &self.title_placeholders
    }

    pub fn ingredient_placeholders(&self) -> &Denylist {
        &self.ingredient_placeholders
    }
}
