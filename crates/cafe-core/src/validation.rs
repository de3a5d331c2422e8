//! # Validation Module
//!
//! Input validation utilities for café billing.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Building a menu (InMemoryMenu::new)                                   │
//! │  ├── validate_menu_item_name                                           │
//! │  └── validate_unit_cost                                                │
//! │                                                                         │
//! │  Pricing an order (BillCalculator::calculate_bill)                     │
//! │  └── validate_item_name (blank names are refused)                      │
//! │                                                                         │
//! │  Configuring charges (ServiceChargePolicy::new)                        │
//! │  ├── validate_rate_bps                                                 │
//! │  └── validate_unit_cost (reused for the cap)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cafe_core::validation::{validate_item_name, validate_rate_bps};
//!
//! assert!(validate_item_name("Cola").is_ok());
//! assert!(validate_item_name("   ").is_err());
//! assert!(validate_rate_bps(2000).is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_MENU_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an ordered item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// Length is not checked: an overlong name simply won't be on the menu
/// and is reported as unavailable.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "item name".to_string(),
        });
    }

    Ok(())
}

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most MAX_MENU_NAME_LEN (100) characters
///
/// ## Example
/// ```rust
/// use cafe_core::validation::validate_menu_item_name;
///
/// assert!(validate_menu_item_name("Steak Sandwich").is_ok());
/// assert!(validate_menu_item_name("").is_err());
/// ```
pub fn validate_menu_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "menu item name".to_string(),
        });
    }

    if name.chars().count() > MAX_MENU_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "menu item name".to_string(),
            max: MAX_MENU_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a non-negative amount.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, no cap)
///
/// ## Example
/// ```rust
/// use cafe_core::money::Money;
/// use cafe_core::validation::validate_unit_cost;
///
/// assert!(validate_unit_cost("unit cost", Money::from_cents(450)).is_ok());
/// assert!(validate_unit_cost("unit cost", Money::zero()).is_ok());
/// assert!(validate_unit_cost("unit cost", Money::from_cents(-1)).is_err());
/// ```
pub fn validate_unit_cost(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a charge rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "charge rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
