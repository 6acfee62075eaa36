use thiserror::Error;

/// Errors raised while building a field value or an entity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Raw input broke one of the field's rules
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the rejected field (e.g. "title", "author_id")
        field: &'static str,
        /// Human-readable description of the violated rule
        reason: String,
    },
}

impl ValidationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        let err = ValidationError::InvalidInput {
            field,
            reason: reason.into(),
        };
        log::debug!("{}", err);
        err
    }

    /// Name of the field that was rejected
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidInput { field, .. } => field,
        }
    }

    /// Reason the input was rejected
    pub fn reason(&self) -> &str {
        match self {
            ValidationError::InvalidInput { reason, .. } => reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
