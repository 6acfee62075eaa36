//! Shared text primitives used by every text field.

pub mod content;
pub mod normalize;
pub mod placeholder;

pub use content::{contains_control_chars, contains_markup, decode, is_valid_encoding};
pub use normalize::normalize;
pub use placeholder::{is_placeholder, placeholder_key, Denylist};
