//! # Menu Files
//!
//! Loads a replacement menu from TOML.
//!
//! ```toml
//! [[items]]
//! name = "Cola"
//! category = "drink"      # food | drink
//! temperature = "cold"    # hot | cold
//! unit_cost = "0.50"
//! ```
//!
//! Costs are decimal strings so that no price ever passes through a float.

use std::fs;
use std::path::Path;

use cafe_core::{CoreError, InMemoryMenu, ItemCategory, ItemTemperature, MenuItem, Money};
use serde::Deserialize;
use tracing::info;

use crate::error::{CliError, CliResult};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MenuFile {
    #[serde(default)]
    items: Vec<MenuFileEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MenuFileEntry {
    name: String,
    category: ItemCategory,
    temperature: ItemTemperature,
    unit_cost: String,
}

impl MenuFileEntry {
    fn into_menu_item(self) -> CliResult<MenuItem> {
        let unit_cost: Money = self.unit_cost.parse().map_err(CoreError::from)?;
        Ok(MenuItem::new(
            self.name,
            self.category,
            self.temperature,
            unit_cost,
        ))
    }
}

/// Reads and validates a menu file.
pub fn load_menu(path: &Path) -> CliResult<InMemoryMenu> {
    let text = fs::read_to_string(path).map_err(|source| CliError::MenuRead {
        path: path.to_path_buf(),
        source,
    })?;

    let menu = parse_menu(&text)?;
    info!(path = %path.display(), items = menu.len(), "Menu file loaded");
    Ok(menu)
}

/// Parses menu TOML. Duplicate names, blank names and negative costs are
/// rejected by `InMemoryMenu::new`.
pub fn parse_menu(text: &str) -> CliResult<InMemoryMenu> {
    let file: MenuFile = toml::from_str(text)?;

    let items = file
        .items
        .into_iter()
        .map(MenuFileEntry::into_menu_item)
        .collect::<CliResult<Vec<_>>>()?;

    Ok(InMemoryMenu::new(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::{MenuCatalog, ValidationError};

    const TEA_ROOM: &str = r#"
        [[items]]
        name = "Tea"
        category = "drink"
        temperature = "hot"
        unit_cost = "1.20"

        [[items]]
        name = "Scone"
        category = "food"
        temperature = "cold"
        unit_cost = "2.5"
    "#;

    #[test]
    fn test_parse_menu() {
        let menu = parse_menu(TEA_ROOM).unwrap();
        assert_eq!(menu.len(), 2);

        let found = menu.lookup(&["scone".to_string()]);
        let scone = &found["scone"];
        assert_eq!(scone.name(), "Scone");
        assert_eq!(scone.category(), ItemCategory::Food);
        assert_eq!(scone.temperature(), ItemTemperature::Cold);
        assert_eq!(scone.unit_cost().cents(), 250);
    }

    #[test]
    fn test_empty_menu_file() {
        assert!(parse_menu("").unwrap().is_empty());
    }

    #[test]
    fn test_bad_cost_is_rejected() {
        let err = parse_menu(
            r#"
            [[items]]
            name = "Tea"
            category = "drink"
            temperature = "hot"
            unit_cost = "1.205"
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CliError::Core(CoreError::Validation(ValidationError::InvalidFormat { .. }))
        ));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = parse_menu(
            r#"
            [[items]]
            name = "Tea"
            category = "dessert"
            temperature = "hot"
            unit_cost = "1.20"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, CliError::MenuParse(_)));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let err = parse_menu(
            r#"
            [[items]]
            name = "Tea"
            category = "drink"
            temperature = "hot"
            unit_cost = "1.20"

            [[items]]
            name = "tea"
            category = "drink"
            temperature = "cold"
            unit_cost = "1.50"
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CliError::Core(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_menu(Path::new("/definitely/not/a/menu.toml")).unwrap_err();
        assert!(matches!(err, CliError::MenuRead { .. }));
    }
}
