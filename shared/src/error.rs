use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ModalError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Form action must not be empty")]
    EmptyAction,

    #[error("Invalid form action: {0}")]
    InvalidAction(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl ModalError {
    /// Whether the error comes from a missing overlay or form node.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ModalError::NotFound(_))
    }
}

impl From<ValidationErrors> for ModalError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for ModalError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModalError>;
