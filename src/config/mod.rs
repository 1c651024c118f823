//! Configuration loading and management for the Pricing and Settlement Engine.
//!
//! This module provides functionality to load pricing configuration from YAML
//! files, including marketplace metadata, the discount tier schedule, the
//! commission split parameters and the option rate table.
//!
//! # Example
//!
//! ```no_run
//! use rental_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/marketplace").unwrap();
//! println!("Loaded marketplace: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    Beneficiary, CommissionConfig, DiscountTier, DiscountsConfig, MarketplaceMetadata, OptionRate,
    OptionsConfig, PricingConfig,
};
