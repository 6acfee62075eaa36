mod recipe;
mod user;

pub use recipe::{Recipe, RecipeBuilder};
pub use user::User;

use crate::error::{Result, ValidationError};

/// Identity references must be strictly positive
pub(crate) fn positive_id(field: &'static str, id: i64) -> Result<i64> {
    if id <= 0 {
        return Err(ValidationError::invalid(field, "must be greater than zero"));
    }
    Ok(id)
}
