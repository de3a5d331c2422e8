//! # Domain Types
//!
//! Core domain types used throughout café billing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │    OrderLine    │   │      Bill       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │──►│  item           │──►│  item_total     │       │
//! │  │  category       │   │  count (>= 1)   │   │  service_charge │       │
//! │  │  temperature    │   └─────────────────┘   │  total()        │       │
//! │  │  unit_cost      │     (transient)         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   ChargeRate    │   │  ItemCategory   │   │ ItemTemperature │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Food           │   │  Hot            │       │
//! │  │  2000 = 20%     │   │  Drink          │   │  Cold           │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is immutable after construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Charge Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20% (hot food service charge)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChargeRate(u32);

impl ChargeRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        ChargeRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        ChargeRate(0)
    }
}

impl Default for ChargeRate {
    fn default() -> Self {
        ChargeRate::zero()
    }
}

// =============================================================================
// Item Classification
// =============================================================================

/// Whether a menu item is something to eat or to drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Food,
    Drink,
}

/// Serving temperature of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ItemTemperature {
    Hot,
    Cold,
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            ItemCategory::Food => "food",
            ItemCategory::Drink => "drink",
        })
    }
}

impl fmt::Display for ItemTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            ItemTemperature::Hot => "hot",
            ItemTemperature::Cold => "cold",
        })
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A purchasable product on the menu.
///
/// Names are unique within a catalog when compared case-insensitively;
/// the catalog enforces that, not this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    name: String,
    category: ItemCategory,
    temperature: ItemTemperature,
    unit_cost: Money,
}

impl MenuItem {
    /// Creates a menu item.
    ///
    /// No validation happens here; `InMemoryMenu::new` validates items
    /// as they enter a catalog.
    pub fn new(
        name: impl Into<String>,
        category: ItemCategory,
        temperature: ItemTemperature,
        unit_cost: Money,
    ) -> Self {
        MenuItem {
            name: name.into(),
            category,
            temperature,
            unit_cost,
        }
    }

    /// Display name, as written on the menu.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn category(&self) -> ItemCategory {
        self.category
    }

    #[inline]
    pub fn temperature(&self) -> ItemTemperature {
        self.temperature
    }

    /// Price of a single unit.
    #[inline]
    pub fn unit_cost(&self) -> Money {
        self.unit_cost
    }

    /// Food served hot. Hot drinks do not count.
    #[inline]
    pub fn is_hot_food(&self) -> bool {
        self.category == ItemCategory::Food && self.temperature == ItemTemperature::Hot
    }

    #[inline]
    pub fn is_food(&self) -> bool {
        self.category == ItemCategory::Food
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// A resolved menu item together with how many times it was ordered.
///
/// Only exists while a bill is being calculated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    item: MenuItem,
    count: i64,
}

impl OrderLine {
    /// Creates a line. `count` is at least 1 by construction in the
    /// calculator, which only builds lines for names it has seen.
    pub(crate) fn new(item: MenuItem, count: i64) -> Self {
        debug_assert!(count >= 1, "order line count must be positive");
        OrderLine { item, count }
    }

    #[inline]
    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    #[inline]
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Unit cost × count, or `None` if it does not fit in `Money`.
    #[inline]
    pub fn line_total(&self) -> Option<Money> {
        self.item.unit_cost().checked_mul_quantity(self.count)
    }
}

// =============================================================================
// Bill
// =============================================================================

/// The result of pricing an order.
///
/// ## Totals
/// ```text
/// item_total      Σ unit_cost × count
/// service_charge  from ServiceChargePolicy
/// ─────────────────────────────────────
/// total()         item_total + service_charge
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Bill {
    item_total: Money,
    service_charge: Money,
}

impl Bill {
    /// Creates a bill from its two components.
    pub const fn new(item_total: Money, service_charge: Money) -> Self {
        Bill {
            item_total,
            service_charge,
        }
    }

    /// A bill for nothing at all.
    pub const fn empty() -> Self {
        Bill::new(Money::zero(), Money::zero())
    }

    /// Sum of unit cost × count over all lines.
    #[inline]
    pub const fn item_total(&self) -> Money {
        self.item_total
    }

    #[inline]
    pub const fn service_charge(&self) -> Money {
        self.service_charge
    }

    /// What the customer pays.
    #[inline]
    pub fn total(&self) -> Money {
        self.item_total + self.service_charge
    }
}

impl Default for Bill {
    fn default() -> Self {
        Bill::empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
