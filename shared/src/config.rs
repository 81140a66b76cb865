use crate::error::Result;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

lazy_static! {
    static ref IDENT_REGEX: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap();
}

pub const DEFAULT_OVERLAY_ID: &str = "overlay";
pub const DEFAULT_FORM_SELECTOR: &str = "form";
pub const DEFAULT_HIDDEN_CLASS: &str = "hidden";

pub fn validate_identifier(val: &str) -> std::result::Result<(), ValidationError> {
    if IDENT_REGEX.is_match(val) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_identifier"))
    }
}

fn default_overlay_id() -> String {
    DEFAULT_OVERLAY_ID.to_string()
}

fn default_form_selector() -> String {
    DEFAULT_FORM_SELECTOR.to_string()
}

fn default_hidden_class() -> String {
    DEFAULT_HIDDEN_CLASS.to_string()
}

/// Where the overlay lives in the page and how its hidden state is marked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ModalConfig {
    /// Element id of the overlay container
    #[validate(length(min = 1, max = 100, message = "Overlay id is required and must be at most 100 characters"))]
    #[validate(custom = "validate_identifier")]
    #[serde(default = "default_overlay_id")]
    pub overlay_id: String,

    /// Selector of the form, relative to the overlay
    #[validate(length(min = 1, max = 100, message = "Form selector is required and must be at most 100 characters"))]
    #[serde(default = "default_form_selector")]
    pub form_selector: String,

    /// CSS class whose presence hides the overlay
    #[validate(length(min = 1, max = 100, message = "Hidden class is required and must be at most 100 characters"))]
    #[validate(custom = "validate_identifier")]
    #[serde(default = "default_hidden_class")]
    pub hidden_class: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            overlay_id: default_overlay_id(),
            form_selector: default_form_selector(),
            hidden_class: default_hidden_class(),
        }
    }
}

impl ModalConfig {
    /// Parses a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ModalConfig = serde_json::from_str(json)?;
        config.validated()
    }

    /// Returns the config if every field passes validation.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    pub fn with_hidden_class(mut self, hidden_class: impl Into<String>) -> Self {
        self.hidden_class = hidden_class.into();
        self
    }
}
