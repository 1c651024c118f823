//! Option surcharge calculation functionality.
//!
//! This module accumulates the per-day option surcharges of a rental into
//! an owner-side and a platform-side extra.

use std::collections::HashMap;

use crate::config::{Beneficiary, OptionRate};
use crate::error::{EngineError, EngineResult};
use crate::models::RentalOption;

/// Option surcharges of a rental, split by beneficiary.
///
/// Amounts are in minor currency units. The driver pays both sides on top
/// of the base price; the owner side is credited to the car owner and the
/// platform side to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionExtras {
    /// Surcharges credited to the car owner.
    pub owner_extra: i64,
    /// Surcharges credited to the platform.
    pub platform_extra: i64,
}

impl OptionExtras {
    /// The total surcharge the driver pays on top of the base price.
    pub fn total(&self) -> i64 {
        self.owner_extra + self.platform_extra
    }
}

/// Accumulates the surcharges of a rental's options.
///
/// Each option charges its per-day rate for every rental day, and the
/// surcharge is credited to the option's configured beneficiary.
///
/// # Arguments
///
/// * `options` - The options booked for the rental
/// * `duration` - The rental duration in days
/// * `rates` - The option rate table from the pricing configuration
///
/// # Returns
///
/// Returns the accumulated [`OptionExtras`], or `CalculationError` when an
/// option has no configured rate (loading validates the table, so this only
/// fails on a hand-built configuration).
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use rental_engine::calculation::calculate_option_extras;
/// use rental_engine::config::{Beneficiary, OptionRate};
/// use rental_engine::models::RentalOption;
///
/// let mut rates = HashMap::new();
/// rates.insert(
///     RentalOption::Gps,
///     OptionRate { per_day: 500, beneficiary: Beneficiary::Owner },
/// );
///
/// let extras = calculate_option_extras(&[RentalOption::Gps], 2, &rates).unwrap();
/// assert_eq!(extras.owner_extra, 1000);
/// assert_eq!(extras.platform_extra, 0);
/// ```
pub fn calculate_option_extras(
    options: &[RentalOption],
    duration: u32,
    rates: &HashMap<RentalOption, OptionRate>,
) -> EngineResult<OptionExtras> {
    let mut extras = OptionExtras::default();

    for option in options {
        let rate = rates
            .get(option)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("no rate configured for option '{}'", option.as_str()),
            })?;

        let surcharge = rate.per_day * i64::from(duration);
        match rate.beneficiary {
            Beneficiary::Owner => extras.owner_extra += surcharge,
            Beneficiary::Platform => extras.platform_extra += surcharge,
        }
    }

    Ok(extras)
}
