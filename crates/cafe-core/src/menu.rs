//! # Menu Catalog
//!
//! Where menu items come from, behind a trait.
//!
//! ## Catalog Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  BillCalculator                                                        │
//! │       │                                                                 │
//! │       │  catalog.lookup(["cola", "tea"])     ONE batch call            │
//! │       ▼                                                                 │
//! │  MenuCatalog (trait)                                                   │
//! │  ├── InMemoryMenu::standard()  built-in four item menu                 │
//! │  ├── InMemoryMenu::new(items)  any validated list (e.g. a TOML file)   │
//! │  └── ... anything else that can answer a batch lookup                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  {"cola" → Cola}                     missing names are simply absent   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name Matching
//! Names match after [`normalize_name`]: surrounding whitespace trimmed,
//! then lowercased. The fold does not depend on the process locale, so
//! "COFFEE", "Coffee" and "coffee" resolve the same everywhere.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{ItemCategory, ItemTemperature, MenuItem};
use crate::validation::{validate_menu_item_name, validate_unit_cost};

/// Canonical form of an item name for comparisons.
///
/// ## Example
/// ```rust
/// use cafe_core::menu::normalize_name;
///
/// assert_eq!(normalize_name("  Steak SANDWICH "), "steak sandwich");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

// =============================================================================
// Catalog Trait
// =============================================================================

/// Read-only, case-insensitive access to menu items.
///
/// Implementations only answer what they have. Reporting names that are
/// missing is the caller's job.
pub trait MenuCatalog {
    /// Looks up every name in one call.
    ///
    /// The returned map holds an entry for each name that exists on the
    /// menu, keyed by the name exactly as it was passed in. Names not on
    /// the menu are left out.
    fn lookup(&self, names: &[String]) -> HashMap<String, MenuItem>;
}

// =============================================================================
// In-Memory Catalog
// =============================================================================

/// A fixed menu held in memory.
///
/// ## Invariants
/// - Names are unique under case-insensitive comparison
/// - No blank names, no negative unit costs
#[derive(Debug, Clone, Default)]
pub struct InMemoryMenu {
    items: HashMap<String, MenuItem>,
}

impl InMemoryMenu {
    /// Builds a menu from a list of items.
    ///
    /// ## Errors
    /// - `ValidationError::Required` / `TooLong` for a bad name
    /// - `ValidationError::OutOfRange` for a negative unit cost
    /// - `ValidationError::Duplicate` when two names collide case-insensitively
    pub fn new(items: impl IntoIterator<Item = MenuItem>) -> CoreResult<Self> {
        let mut by_name = HashMap::new();

        for item in items {
            validate_menu_item_name(item.name())?;
            validate_unit_cost("unit cost", item.unit_cost())?;

            let key = normalize_name(item.name());
            if by_name.contains_key(&key) {
                return Err(ValidationError::Duplicate {
                    field: "menu item".to_string(),
                    value: item.name().to_string(),
                }
                .into());
            }
            by_name.insert(key, item);
        }

        debug!(items = by_name.len(), "Menu loaded");
        Ok(InMemoryMenu { items: by_name })
    }

    /// The café's standard menu.
    ///
    /// | Name            | Category | Temperature | Unit cost |
    /// |-----------------|----------|-------------|-----------|
    /// | Cola            | Drink    | Cold        | 0.50      |
    /// | Coffee          | Drink    | Hot         | 1.00      |
    /// | Cheese Sandwich | Food     | Cold        | 2.00      |
    /// | Steak Sandwich  | Food     | Hot         | 4.50      |
    pub fn standard() -> Self {
        let items = [
            MenuItem::new(
                "Cola",
                ItemCategory::Drink,
                ItemTemperature::Cold,
                Money::from_cents(50),
            ),
            MenuItem::new(
                "Coffee",
                ItemCategory::Drink,
                ItemTemperature::Hot,
                Money::from_cents(100),
            ),
            MenuItem::new(
                "Cheese Sandwich",
                ItemCategory::Food,
                ItemTemperature::Cold,
                Money::from_cents(200),
            ),
            MenuItem::new(
                "Steak Sandwich",
                ItemCategory::Food,
                ItemTemperature::Hot,
                Money::from_cents(450),
            ),
        ];

        let items = items
            .into_iter()
            .map(|item| (normalize_name(item.name()), item))
            .collect();
        InMemoryMenu { items }
    }

    /// Number of items on the menu.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, sorted by display name.
    pub fn items(&self) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self.items.values().collect();
        items.sort_by(|a, b| a.name().cmp(b.name()));
        items
    }
}

impl MenuCatalog for InMemoryMenu {
    fn lookup(&self, names: &[String]) -> HashMap<String, MenuItem> {
        names
            .iter()
            .filter_map(|name| {
                self.items
                    .get(&normalize_name(name))
                    .map(|item| (name.clone(), item.clone()))
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("COFFEE"), "coffee");
        assert_eq!(normalize_name("ChEeSe SaNdWiCh"), "cheese sandwich");
        assert_eq!(normalize_name("  cola\t"), "cola");
    }

    #[test]
    fn test_standard_menu() {
        let menu = InMemoryMenu::standard();
        assert_eq!(menu.len(), 4);

        let listed: Vec<&str> = menu.items().iter().map(|i| i.name()).collect();
        assert_eq!(
            listed,
            vec!["Cheese Sandwich", "Coffee", "Cola", "Steak Sandwich"]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let menu = InMemoryMenu::standard();

        for query in ["COFFEE", "Coffee", "coffee", "cOfFeE"] {
            let found = menu.lookup(&names(&[query]));
            let item = found.get(query).expect("coffee should resolve");
            assert_eq!(item.name(), "Coffee");
            assert_eq!(item.unit_cost().cents(), 100);
        }
    }

    #[test]
    fn test_lookup_omits_missing_names() {
        let menu = InMemoryMenu::standard();
        let found = menu.lookup(&names(&["coffee", "tea", "beer"]));

        assert_eq!(found.len(), 1);
        assert!(found.contains_key("coffee"));
        assert!(!found.contains_key("tea"));
    }

    #[test]
    fn test_lookup_empty() {
        let menu = InMemoryMenu::standard();
        assert!(menu.lookup(&[]).is_empty());
    }

    #[test]
    fn test_new_rejects_case_insensitive_duplicates() {
        let err = InMemoryMenu::new([
            MenuItem::new(
                "Tea",
                ItemCategory::Drink,
                ItemTemperature::Hot,
                Money::from_cents(120),
            ),
            MenuItem::new(
                "TEA",
                ItemCategory::Drink,
                ItemTemperature::Cold,
                Money::from_cents(150),
            ),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            CoreError::Validation(ValidationError::Duplicate {
                field: "menu item".to_string(),
                value: "TEA".to_string(),
            })
        );
    }

    #[test]
    fn test_new_rejects_bad_items() {
        let blank = MenuItem::new(
            " ",
            ItemCategory::Food,
            ItemTemperature::Cold,
            Money::from_cents(100),
        );
        assert!(InMemoryMenu::new([blank]).is_err());

        let negative = MenuItem::new(
            "Refund Sandwich",
            ItemCategory::Food,
            ItemTemperature::Cold,
            Money::from_cents(-100),
        );
        assert!(InMemoryMenu::new([negative]).is_err());
    }

    #[test]
    fn test_new_custom_menu() {
        let menu = InMemoryMenu::new([MenuItem::new(
            "Tea",
            ItemCategory::Drink,
            ItemTemperature::Hot,
            Money::from_cents(120),
        )])
        .unwrap();

        assert_eq!(menu.len(), 1);
        assert!(menu.lookup(&names(&["tea"])).contains_key("tea"));
        assert!(menu.lookup(&names(&["cola"])).is_empty());
        assert!(InMemoryMenu::default().is_empty());
    }
}
