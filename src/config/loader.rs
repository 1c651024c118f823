//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pricing
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::RentalOption;

use super::types::{
    CommissionConfig, DiscountTier, DiscountsConfig, MarketplaceMetadata, OptionRate,
    OptionsConfig, PricingConfig,
};

/// Loads and provides access to pricing configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and validates the invariants the calculation layer relies on.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/marketplace/
/// ├── marketplace.yaml # Marketplace metadata
/// ├── discounts.yaml   # Per-day discount tier schedule
/// ├── commission.yaml  # Commission split parameters
/// └── options.yaml     # Option rate table
/// ```
///
/// # Example
///
/// ```no_run
/// use rental_engine::config::ConfigLoader;
/// use rental_engine::models::RentalOption;
///
/// let loader = ConfigLoader::load("./config/marketplace").unwrap();
///
/// let rate = loader.option_rate(RentalOption::Gps).unwrap();
/// println!("GPS surcharge per day: {}", rate.per_day);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PricingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/marketplace")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The discount schedule violates its invariants
    /// - Any option is missing from the rate table
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("marketplace.yaml");
        let metadata = Self::load_yaml::<MarketplaceMetadata>(&metadata_path)?;

        let discounts_path = path.join("discounts.yaml");
        let discounts = Self::load_yaml::<DiscountsConfig>(&discounts_path)?;
        Self::validate_tiers(&discounts.tiers, &discounts_path)?;

        let commission_path = path.join("commission.yaml");
        let commission = Self::load_yaml::<CommissionConfig>(&commission_path)?;

        let options_path = path.join("options.yaml");
        let options = Self::load_yaml::<OptionsConfig>(&options_path)?;
        Self::validate_options(&options, &options_path)?;

        let config = PricingConfig::new(metadata, discounts.tiers, commission, options.options);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Validates the discount schedule invariants.
    ///
    /// The first tier must start at day 1, tier starts must be strictly
    /// increasing, and multipliers must be non-increasing as the day index
    /// grows.
    fn validate_tiers(tiers: &[DiscountTier], path: &Path) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        let Some(first) = tiers.first() else {
            return Err(parse_error("discount schedule has no tiers".to_string()));
        };
        if first.from_day != 1 {
            return Err(parse_error(format!(
                "first discount tier must start at day 1, found day {}",
                first.from_day
            )));
        }

        for pair in tiers.windows(2) {
            if pair[1].from_day <= pair[0].from_day {
                return Err(parse_error(format!(
                    "discount tier starts must be strictly increasing, found day {} after day {}",
                    pair[1].from_day, pair[0].from_day
                )));
            }
            if pair[1].multiplier > pair[0].multiplier {
                return Err(parse_error(format!(
                    "discount multipliers must be non-increasing, found {} after {}",
                    pair[1].multiplier, pair[0].multiplier
                )));
            }
        }

        Ok(())
    }

    /// Validates that every bookable option has a configured rate.
    fn validate_options(options: &OptionsConfig, path: &Path) -> EngineResult<()> {
        for option in RentalOption::ALL {
            if !options.options.contains_key(&option) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("missing rate for option '{}'", option.as_str()),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Returns the marketplace metadata.
    pub fn metadata(&self) -> &MarketplaceMetadata {
        self.config.metadata()
    }

    /// Gets the rate for a rental option.
    ///
    /// # Arguments
    ///
    /// * `option` - The option to look up
    ///
    /// # Returns
    ///
    /// Returns the option's rate; loading validated that every option has
    /// one, so this only fails on a hand-built configuration.
    pub fn option_rate(&self, option: RentalOption) -> EngineResult<&OptionRate> {
        self.config
            .options()
            .get(&option)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("no rate configured for option '{}'", option.as_str()),
            })
    }
}
