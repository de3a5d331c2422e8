//! # cafe-core: Pure Billing Logic for the Café
//!
//! This crate prices orders. It contains all business logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Café Billing Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    cafe-cli (`cafe` binary)                     │   │
//! │  │    args ──► config ──► menu ──► calculate ──► print / exit code │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cafe-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   menu    │  │  billing  │  │  service  │  │   money   │  │   │
//! │  │   │ Catalog   │─►│ Calculator│─►│  charge   │  │   Money   │  │   │
//! │  │   │ InMemory  │  │   Bill    │  │  Policy   │  │ ChargeRate│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, OrderLine, Bill, ChargeRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`menu`] - The `MenuCatalog` trait and the in-memory menu
//! - [`billing`] - `BillCalculator`
//! - [`service_charge`] - Service charge tiers and policy
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same order + same menu = same bill
//! 2. **No I/O**: the menu arrives through a trait
//! 3. **Integer Money**: amounts in cents, rates in basis points
//! 4. **Explicit Errors**: unavailable items are a `Result::Err`, never a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use cafe_core::{BillCalculator, InMemoryMenu};
//!
//! let calculator = BillCalculator::new(InMemoryMenu::standard());
//! let bill = calculator.calculate_bill(["Steak Sandwich", "Cola"]).unwrap();
//!
//! assert_eq!(bill.item_total().to_string(), "5.00");
//! assert_eq!(bill.service_charge().to_string(), "1.00");
//! assert_eq!(bill.total().to_string(), "6.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod error;
pub mod menu;
pub mod money;
pub mod service_charge;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use billing::BillCalculator;
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{normalize_name, InMemoryMenu, MenuCatalog};
pub use money::Money;
pub use service_charge::{ServiceChargePolicy, ServiceChargeTier};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Hot food service charge: 20%.
pub const DEFAULT_HOT_FOOD_RATE_BPS: u32 = 2000;

/// Ceiling on the hot food service charge: 20.00.
pub const DEFAULT_HOT_FOOD_CAP_CENTS: i64 = 2000;

/// Cold food service charge: 10%, no ceiling.
pub const DEFAULT_COLD_FOOD_RATE_BPS: u32 = 1000;

/// Longest menu item name accepted when building a menu.
pub const MAX_MENU_NAME_LEN: usize = 100;
