//! # Billing
//!
//! Turns a list of ordered item names into a [`Bill`].
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       calculate_bill()                                  │
//! │                                                                         │
//! │  ["Cola", "COLA", "Steak Sandwich"]                                    │
//! │       │                                                                 │
//! │       ▼  normalize + count, first-occurrence order                     │
//! │  [("cola", 2), ("steak sandwich", 1)]                                  │
//! │       │                                                                 │
//! │       ▼  ONE batch catalog lookup                                      │
//! │  {"cola" → Cola, "steak sandwich" → Steak Sandwich}                    │
//! │       │                                                                 │
//! │       ├── any name missing? ──► Err(UnavailableItems), nothing billed  │
//! │       │                                                                 │
//! │       ▼  OrderLines                                                    │
//! │  [(Cola, 2), (Steak Sandwich, 1)]                                      │
//! │       │                                                                 │
//! │       ▼  item_total = Σ unit_cost × count            = 5.50            │
//! │       ▼  service_charge = policy(items present, total) = 1.10          │
//! │                                                                         │
//! │  Bill { item_total: 5.50, service_charge: 1.10 }                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::menu::{normalize_name, MenuCatalog};
use crate::money::Money;
use crate::service_charge::{ServiceChargePolicy, ServiceChargeTier};
use crate::types::{Bill, OrderLine};
use crate::validation::validate_item_name;

/// Prices orders against a menu.
///
/// The calculator holds no per-order state. Every call allocates its own
/// working data, so a shared calculator can serve concurrent callers as
/// long as the catalog allows shared reads.
#[derive(Debug, Clone)]
pub struct BillCalculator<C> {
    catalog: C,
    policy: ServiceChargePolicy,
}

impl<C: MenuCatalog> BillCalculator<C> {
    /// Creates a calculator with the default service charge policy.
    pub fn new(catalog: C) -> Self {
        Self::with_policy(catalog, ServiceChargePolicy::default())
    }

    /// Creates a calculator with a custom service charge policy.
    pub fn with_policy(catalog: C, policy: ServiceChargePolicy) -> Self {
        BillCalculator { catalog, policy }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn policy(&self) -> &ServiceChargePolicy {
        &self.policy
    }

    /// Calculates the bill for a list of item names.
    ///
    /// Names are matched case-insensitively and may repeat; each repeat
    /// adds one more unit to that line.
    ///
    /// ## Errors
    /// - `CoreError::UnavailableItems` listing every name not on the menu,
    ///   normalized, in the order first ordered. No bill is produced.
    /// - `CoreError::Validation` for an empty or whitespace-only name, or
    ///   when the bill total does not fit in a `Money` amount.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::billing::BillCalculator;
    /// use cafe_core::menu::InMemoryMenu;
    ///
    /// let calculator = BillCalculator::new(InMemoryMenu::standard());
    ///
    /// let bill = calculator
    ///     .calculate_bill(["Steak Sandwich", "Cola", "Cheese Sandwich"])
    ///     .unwrap();
    /// assert_eq!(bill.item_total().to_string(), "7.00");
    /// assert_eq!(bill.service_charge().to_string(), "1.40");
    ///
    /// let err = calculator.calculate_bill(["Coffee", "Tea", "Beer"]).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Sorry, we don't serve that here. Items: tea, beer"
    /// );
    /// ```
    pub fn calculate_bill<I, S>(&self, item_names: I) -> CoreResult<Bill>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = self.resolve_lines(item_names)?;

        let item_total = lines
            .iter()
            .try_fold(Money::zero(), |sum, line| {
                line.line_total().and_then(|total| sum.checked_add(total))
            })
            .ok_or_else(total_out_of_range)?;
        let tier = ServiceChargeTier::classify(lines.iter().map(OrderLine::item));
        let service_charge = self.policy.charge_for_tier(tier, item_total);

        // Bill::total() adds these unchecked
        if item_total.checked_add(service_charge).is_none() {
            return Err(total_out_of_range());
        }

        debug!(
            lines = lines.len(),
            %item_total,
            %service_charge,
            ?tier,
            "Bill calculated"
        );

        Ok(Bill::new(item_total, service_charge))
    }

    /// Resolves names to order lines, or fails with every missing name.
    fn resolve_lines<I, S>(&self, item_names: I) -> CoreResult<Vec<OrderLine>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tally = tally_names(item_names)?;
        let distinct: Vec<String> = tally.iter().map(|(name, _)| name.clone()).collect();

        let mut found = self.catalog.lookup(&distinct);
        debug!(
            requested = distinct.len(),
            resolved = found.len(),
            "Menu lookup complete"
        );

        let mut lines = Vec::with_capacity(tally.len());
        let mut unavailable = Vec::new();

        for (name, count) in tally {
            match found.remove(&name) {
                Some(item) => lines.push(OrderLine::new(item, count)),
                None => unavailable.push(name),
            }
        }

        if !unavailable.is_empty() {
            warn!(items = ?unavailable, "Order contains items not on the menu");
            return Err(CoreError::UnavailableItems { items: unavailable });
        }

        Ok(lines)
    }
}

fn total_out_of_range() -> CoreError {
    warn!("Bill total does not fit in a Money amount");
    ValidationError::OutOfRange {
        field: "bill total in cents".to_string(),
        min: 0,
        max: i64::MAX,
    }
    .into()
}

/// Normalizes names and counts them, keeping first-occurrence order.
fn tally_names<I, S>(item_names: I) -> CoreResult<Vec<(String, i64)>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tally: Vec<(String, i64)> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();

    for raw in item_names {
        let raw = raw.as_ref();
        validate_item_name(raw)?;

        let name = normalize_name(raw);
        match position.get(&name) {
            Some(&index) => tally[index].1 += 1,
            None => {
                position.insert(name.clone(), tally.len());
                tally.push((name, 1));
            }
        }
    }

    Ok(tally)
}

// =============================================================================
// Unit Tests
// =============================================================================
