//! Domain Errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Recipe has no base servings")]
    InvalidRecipe,

    #[error("Servings must be a whole number of at least 1, got {0:?}")]
    InvalidServings(String),

    #[error("{field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Start date {start} is after end date {end}")]
    InvalidRange { start: String, end: String },

    #[error("Malformed session token: {0}")]
    MalformedToken(String),
}

impl DomainError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        DomainError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
