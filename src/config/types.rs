//! Configuration types for rental pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::RentalOption;

/// Metadata about the marketplace.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketplaceMetadata {
    /// The human-readable name of the marketplace.
    pub name: String,
    /// The version or effective date of this pricing configuration.
    pub version: String,
    /// The ISO-4217 currency whose minor unit all amounts are expressed in.
    pub currency: String,
}

/// One tier of the per-day discount schedule.
///
/// A tier applies from `from_day` (1-based, inclusive) until the next tier
/// starts. The first tier must start at day 1.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiscountTier {
    /// The first day index this tier applies to.
    pub from_day: u32,
    /// The multiplier applied to the daily rate within this tier.
    pub multiplier: Decimal,
}

/// Discount schedule configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscountsConfig {
    /// The discount tiers, sorted by `from_day` ascending.
    pub tiers: Vec<DiscountTier>,
}

/// Commission split parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct CommissionConfig {
    /// The fraction of the base price taken as the platform fee.
    pub rate: Decimal,
    /// The fraction of the platform fee credited to the insurer.
    pub insurance_share: Decimal,
    /// The fixed roadside-assistance fee per rental day, in minor units.
    pub assistance_fee_per_day: i64,
}

impl CommissionConfig {
    /// The fraction of the base price credited to the car owner.
    pub fn owner_share(&self) -> Decimal {
        Decimal::ONE - self.rate
    }
}

/// The party an option surcharge is credited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Beneficiary {
    /// The surcharge goes to the car owner.
    Owner,
    /// The surcharge goes to the platform.
    Platform,
}

/// Pricing of a single rental option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OptionRate {
    /// The surcharge per rental day, in minor units.
    pub per_day: i64,
    /// The party the surcharge is credited to.
    pub beneficiary: Beneficiary,
}

/// Option rate table configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// Map of option to its rate and beneficiary.
    pub options: HashMap<RentalOption, OptionRate>,
}

/// The complete pricing configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a marketplace configuration directory.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Marketplace metadata.
    metadata: MarketplaceMetadata,
    /// Discount tiers, sorted by `from_day` ascending.
    tiers: Vec<DiscountTier>,
    /// Commission split parameters.
    commission: CommissionConfig,
    /// Per-option rates.
    options: HashMap<RentalOption, OptionRate>,
}

impl PricingConfig {
    /// Creates a new PricingConfig from its component parts.
    pub fn new(
        metadata: MarketplaceMetadata,
        tiers: Vec<DiscountTier>,
        commission: CommissionConfig,
        options: HashMap<RentalOption, OptionRate>,
    ) -> Self {
        let mut sorted_tiers = tiers;
        sorted_tiers.sort_by(|a, b| a.from_day.cmp(&b.from_day));
        Self {
            metadata,
            tiers: sorted_tiers,
            commission,
            options,
        }
    }

    /// Returns the marketplace metadata.
    pub fn metadata(&self) -> &MarketplaceMetadata {
        &self.metadata
    }

    /// Returns the discount tiers, sorted by `from_day` ascending.
    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    /// Returns the commission split parameters.
    pub fn commission(&self) -> &CommissionConfig {
        &self.commission
    }

    /// Returns the per-option rate table.
    pub fn options(&self) -> &HashMap<RentalOption, OptionRate> {
        &self.options
    }
}
