//! # Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest priority)                                    │
//! │     --menu ./menu.toml                                                 │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     CAFE_MENU_PATH=./menu.toml                                         │
//! │     CAFE_SERVICE_CHARGE__HOT_FOOD_CAP=25.00                            │
//! │                                                                         │
//! │  3. TOML Config File (--config or CAFE_CONFIG)                         │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     standard menu, 20% capped at 20.00, 10% uncapped                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # cafe.toml
//! menu_path = "menu.toml"
//! log_filter = "cafe_core=debug"
//!
//! [service_charge]
//! hot_food_rate_bps = 2000   # 20%
//! hot_food_cap = "20.00"
//! cold_food_rate_bps = 1000  # 10%
//! ```

use std::path::{Path, PathBuf};

use cafe_core::{
    ChargeRate, CoreError, Money, ServiceChargePolicy, DEFAULT_COLD_FOOD_RATE_BPS,
    DEFAULT_HOT_FOOD_CAP_CENTS, DEFAULT_HOT_FOOD_RATE_BPS,
};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::CliResult;

/// Prefix for environment overrides (`CAFE_...`).
pub const ENV_PREFIX: &str = "CAFE";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Menu file to use instead of the standard menu.
    pub menu_path: Option<PathBuf>,

    /// tracing filter directive, used when RUST_LOG is not set.
    pub log_filter: Option<String>,

    pub service_charge: ServiceChargeSettings,
}

/// Service charge parameters as written in configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceChargeSettings {
    pub hot_food_rate_bps: u32,
    /// Decimal amount, e.g. "20.00".
    pub hot_food_cap: String,
    pub cold_food_rate_bps: u32,
}

impl Default for ServiceChargeSettings {
    fn default() -> Self {
        ServiceChargeSettings {
            hot_food_rate_bps: DEFAULT_HOT_FOOD_RATE_BPS,
            hot_food_cap: Money::from_cents(DEFAULT_HOT_FOOD_CAP_CENTS).to_string(),
            cold_food_rate_bps: DEFAULT_COLD_FOOD_RATE_BPS,
        }
    }
}

impl AppConfig {
    /// Loads configuration from an optional file plus `CAFE_*` variables.
    ///
    /// A file that is named but missing is an error.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        // values stay strings until deserialized; the cap is parsed as text
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validated service charge policy.
    pub fn service_charge_policy(&self) -> CliResult<ServiceChargePolicy> {
        let settings = &self.service_charge;
        let cap: Money = settings
            .hot_food_cap
            .parse()
            .map_err(CoreError::from)?;

        let policy = ServiceChargePolicy::new(
            ChargeRate::from_bps(settings.hot_food_rate_bps),
            cap,
            ChargeRate::from_bps(settings.cold_food_rate_bps),
        )?;
        Ok(policy)
    }

    /// The `--menu` flag wins over configuration.
    pub fn menu_path<'a>(&'a self, cli_menu: Option<&'a Path>) -> Option<&'a Path> {
        cli_menu.or(self.menu_path.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_match_standard_policy() {
        let config = AppConfig::default();
        assert_eq!(
            config.service_charge_policy().unwrap(),
            ServiceChargePolicy::default()
        );
        assert!(config.menu_path.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
            menu_path = "special.toml"
            log_filter = "debug"

            [service_charge]
            hot_food_rate_bps = 1500
            hot_food_cap = "25.50"
            "#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.menu_path, Some(PathBuf::from("special.toml")));
        assert_eq!(config.log_filter.as_deref(), Some("debug"));

        let policy = config.service_charge_policy().unwrap();
        assert_eq!(policy.hot_food_rate().bps(), 1500);
        assert_eq!(policy.hot_food_cap().cents(), 2550);
        // unspecified keys keep their defaults
        assert_eq!(policy.cold_food_rate().bps(), 1000);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/definitely/not/here.toml"))).is_err());
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let mut config = AppConfig::default();
        config.service_charge.hot_food_cap = "lots".to_string();
        assert!(config.service_charge_policy().is_err());

        let mut config = AppConfig::default();
        config.service_charge.cold_food_rate_bps = 20000;
        assert!(config.service_charge_policy().is_err());
    }

    #[test]
    fn test_cap_from_environment_keeps_its_decimals() {
        let source = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .source(Some(
                [
                    (
                        "CAFE_SERVICE_CHARGE__HOT_FOOD_CAP".to_string(),
                        "25.00".to_string(),
                    ),
                    (
                        "CAFE_SERVICE_CHARGE__HOT_FOOD_RATE_BPS".to_string(),
                        "1500".to_string(),
                    ),
                ]
                .into_iter()
                .collect(),
            ));

        let config: AppConfig = Config::builder()
            .add_source(source)
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.service_charge.hot_food_cap, "25.00");
        let policy = config.service_charge_policy().unwrap();
        assert_eq!(policy.hot_food_cap().cents(), 2500);
        assert_eq!(policy.hot_food_rate().bps(), 1500);
    }

    #[test]
    fn test_cli_menu_wins() {
        let config = AppConfig {
            menu_path: Some(PathBuf::from("configured.toml")),
            ..AppConfig::default()
        };

        assert_eq!(
            config.menu_path(Some(Path::new("flag.toml"))),
            Some(Path::new("flag.toml"))
        );
        assert_eq!(config.menu_path(None), Some(Path::new("configured.toml")));
    }
}
