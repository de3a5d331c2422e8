//! # Error Types
//!
//! Domain-specific error types for cafe-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cafe-core errors (this file)                                          │
//! │  ├── CoreError        - Billing failures                               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  cafe-cli errors (separate crate)                                      │
//! │  └── CliError         - Config, menu file, and wrapped CoreError       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Billing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// One or more ordered names are not on the menu.
    ///
    /// ## When This Occurs
    /// ```text
    /// calculate_bill(["Coffee", "Tea", "Beer"])
    ///      │
    ///      ▼
    /// lookup {coffee, tea, beer} → {coffee}
    ///      │
    ///      ▼
    /// UnavailableItems { items: ["tea", "beer"] }
    ///      │
    ///      ▼
    /// "Sorry, we don't serve that here. Items: tea, beer"
    /// ```
    ///
    /// Names are in normalized form and in the order they were first
    /// ordered. The whole bill is refused; retrying cannot help.
    #[error("Sorry, we don't serve that here. Items: {}", .items.join(", "))]
    UnavailableItems { items: Vec<String> },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// The unresolved names, if this is an `UnavailableItems` error.
    pub fn unavailable_items(&self) -> Option<&[String]> {
        match self {
            CoreError::UnavailableItems { items } => Some(items),
            CoreError::Validation(_) => None,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. an unparseable amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. two menu items with the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_items_message() {
        let err = CoreError::UnavailableItems {
            items: vec!["tea".to_string(), "beer".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Sorry, we don't serve that here. Items: tea, beer"
        );
        assert_eq!(
            err.unavailable_items(),
            Some(&["tea".to_string(), "beer".to_string()][..])
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "item name".to_string(),
        };
        assert_eq!(err.to_string(), "item name is required");

        let err = ValidationError::Duplicate {
            field: "menu item".to_string(),
            value: "cola".to_string(),
        };
        assert_eq!(err.to_string(), "menu item 'cola' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "item name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.unavailable_items(), None);
    }
}
