//! # Field Validation
//!
//! Declared-constraint checking for create and update payloads.
//!
//! A payload implements [`Validate`] by running its fields through a
//! [`Validator`]. The validator collects **every** violated constraint instead of
//! stopping at the first one, so callers get the full list in a single
//! [`ValidationErrors`] value.
//!
//! ```rust
//! use resource_framework::validation::{Validate, ValidationErrors, Validator};
//!
//! struct NewTag { label: String }
//!
//! impl Validate for NewTag {
//!     fn validate(&self) -> Result<(), ValidationErrors> {
//!         Validator::new()
//!             .required("label", &self.label)
//!             .max_chars("label", &self.label, 20)
//!             .finish()
//!     }
//! }
//!
//! let err = NewTag { label: "  ".into() }.validate().unwrap_err();
//! assert!(err.has_field("label"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A payload whose fields carry declared constraints.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// The non-empty set of constraints a payload violated.
///
/// Only [`Validator::finish`] builds one, and only when something failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Returns true if at least one violation concerns `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.violations.iter().map(|v| v.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Fluent collector of constraint violations.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value must contain at least one non-whitespace character.
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.push(field, format!("{field} is required"));
        }
        self
    }

    /// The value must be at most `max` characters long (counted as chars, not bytes).
    pub fn max_chars(mut self, field: &str, value: &str, max: usize) -> Self {
        let len = value.chars().count();
        if len > max {
            self.push(
                field,
                format!("{field} must be at most {max} characters (got {len})"),
            );
        }
        self
    }

    /// The value must lie in `min..=max`. NaN never does.
    pub fn in_range(mut self, field: &str, value: f64, min: f64, max: f64) -> Self {
        if !(min..=max).contains(&value) {
            self.push(
                field,
                format!("{field} must be between {min} and {max} (got {value})"),
            );
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                violations: self.violations,
            })
        }
    }

    fn push(&mut self, field: &str, message: String) {
        self.violations.push(FieldViolation {
            field: field.to_string(),
            message,
        });
    }
}
