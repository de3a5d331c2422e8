//! # Service Charge Policy
//!
//! Decides how much is added on top of the item total.
//!
//! ## Tiers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Service Charge Decision                             │
//! │                                                                         │
//! │  Any Food + Hot in the order? ──yes──► HotFood                          │
//! │         │                              20% of item total, max 20.00    │
//! │         no                                                              │
//! │         ▼                                                               │
//! │  Any Food in the order? ───────yes──► ColdFood                          │
//! │         │                              10% of item total, NO cap       │
//! │         no                                                              │
//! │         ▼                                                               │
//! │  DrinksOnly ──────────────────────────► 0.00                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the cold food tier is uncapped. A big cold food order can end up
//! with a larger service charge than a big hot food order; that is the
//! agreed behaviour and is covered by tests.
//!
//! The tier depends on which items are present, never on how many of them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{ChargeRate, MenuItem};
use crate::validation::{validate_rate_bps, validate_unit_cost};
use crate::{DEFAULT_COLD_FOOD_RATE_BPS, DEFAULT_HOT_FOOD_CAP_CENTS, DEFAULT_HOT_FOOD_RATE_BPS};

// =============================================================================
// Tier
// =============================================================================

/// Which service charge rule an order falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ServiceChargeTier {
    /// At least one hot food item. Takes priority over cold food.
    HotFood,
    /// Food, but none of it hot.
    ColdFood,
    /// No food at all (including an empty order).
    DrinksOnly,
}

impl ServiceChargeTier {
    /// Classifies an order by the items present in it.
    pub fn classify<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> Self {
        let mut tier = ServiceChargeTier::DrinksOnly;
        for item in items {
            if item.is_hot_food() {
                return ServiceChargeTier::HotFood;
            }
            if item.is_food() {
                tier = ServiceChargeTier::ColdFood;
            }
        }
        tier
    }
}

// =============================================================================
// Policy
// =============================================================================

/// Rates and cap used to turn a tier into an amount.
///
/// Only serializable one way: deserializing would skip the range checks
/// in [`ServiceChargePolicy::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceChargePolicy {
    hot_food_rate: ChargeRate,
    hot_food_cap: Money,
    cold_food_rate: ChargeRate,
}

impl ServiceChargePolicy {
    /// Builds a policy with custom parameters.
    ///
    /// ## Errors
    /// `ValidationError::OutOfRange` if a rate is above 100% or the cap
    /// is negative.
    pub fn new(
        hot_food_rate: ChargeRate,
        hot_food_cap: Money,
        cold_food_rate: ChargeRate,
    ) -> CoreResult<Self> {
        validate_rate_bps(hot_food_rate.bps())?;
        validate_rate_bps(cold_food_rate.bps())?;
        validate_unit_cost("hot food cap", hot_food_cap)?;

        Ok(ServiceChargePolicy {
            hot_food_rate,
            hot_food_cap,
            cold_food_rate,
        })
    }

    pub fn hot_food_rate(&self) -> ChargeRate {
        self.hot_food_rate
    }

    pub fn hot_food_cap(&self) -> Money {
        self.hot_food_cap
    }

    pub fn cold_food_rate(&self) -> ChargeRate {
        self.cold_food_rate
    }

    /// Service charge for an order.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::Money;
    /// use cafe_core::service_charge::ServiceChargePolicy;
    /// use cafe_core::types::{ItemCategory, ItemTemperature, MenuItem};
    ///
    /// let steak = MenuItem::new(
    ///     "Steak Sandwich",
    ///     ItemCategory::Food,
    ///     ItemTemperature::Hot,
    ///     Money::from_cents(450),
    /// );
    ///
    /// let policy = ServiceChargePolicy::default();
    /// let charge = policy.charge_for([&steak], Money::from_cents(11300));
    /// assert_eq!(charge.cents(), 2000); // 22.60 capped at 20.00
    /// ```
    pub fn charge_for<'a>(
        &self,
        items: impl IntoIterator<Item = &'a MenuItem>,
        item_total: Money,
    ) -> Money {
        self.charge_for_tier(ServiceChargeTier::classify(items), item_total)
    }

    /// Service charge for an already classified order.
    pub fn charge_for_tier(&self, tier: ServiceChargeTier, item_total: Money) -> Money {
        match tier {
            ServiceChargeTier::HotFood => item_total
                .percentage(self.hot_food_rate)
                .min(self.hot_food_cap),
            ServiceChargeTier::ColdFood => item_total.percentage(self.cold_food_rate),
            ServiceChargeTier::DrinksOnly => Money::zero(),
        }
    }
}

/// 20% capped at 20.00 for hot food, 10% uncapped for cold food.
impl Default for ServiceChargePolicy {
    fn default() -> Self {
        ServiceChargePolicy {
            hot_food_rate: ChargeRate::from_bps(DEFAULT_HOT_FOOD_RATE_BPS),
            hot_food_cap: Money::from_cents(DEFAULT_HOT_FOOD_CAP_CENTS),
            cold_food_rate: ChargeRate::from_bps(DEFAULT_COLD_FOOD_RATE_BPS),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
