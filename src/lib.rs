//! Validated, normalized value types for recipe and user records.
//!
//! Every field type is built through a constructor that either returns a
//! valid, immutable value or a [`ValidationError`]:
//!
//! ```
//! use recipe_fields::{IngredientList, PreparationTime};
//!
//! let ingredients = IngredientList::new("  harina \r\n\r\n azucar ").unwrap();
//! assert_eq!(ingredients.value(), "harina\nazucar");
//!
//! let time = PreparationTime::from_format("1:30").unwrap();
//! assert_eq!(time.minutes(), 90);
//!
//! assert!(IngredientList::new("<b>azucar</b>").is_err());
//! ```

pub mod config;
pub mod entities;
pub mod error;
pub mod fields;
pub mod guards;
pub mod validator;

pub use crate::config::{load_config, ValidationConfig};
pub use crate::entities::{Recipe, RecipeBuilder, User};
pub use crate::error::ValidationError;
pub use crate::fields::{
    Difficulty, Email, IngredientList, Password, PreparationTime, Title, Username,
};
pub use crate::validator::FieldValidator;
