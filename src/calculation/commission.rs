//! Commission split calculation functionality.
//!
//! This module splits the platform fee taken on a rental's base price
//! between the insurer, the roadside-assistance provider and the platform.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::CommissionConfig;
use crate::error::{EngineError, EngineResult};

/// The three-way split of the platform fee for a rental.
///
/// Amounts are in minor currency units. The platform amount is the residual
/// after the insurer and assistance take their share, and MAY be negative
/// for short, cheap rentals; it is deliberately not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionSplit {
    /// The insurer's share of the platform fee.
    pub insurance: i64,
    /// The fixed roadside-assistance fee for the rental.
    pub assistance: i64,
    /// The residual kept by the platform.
    pub platform: i64,
}

/// Splits the platform fee for a rental.
///
/// The fee is `rate` of the base price, truncated toward zero. The insurer
/// takes `insurance_share` of the fee (truncated), assistance takes a fixed
/// fee per rental day, and the platform keeps the exact residual.
///
/// # Arguments
///
/// * `base_price` - The rental's base price, in minor units
/// * `duration` - The rental duration in days
/// * `config` - The commission split parameters
///
/// # Returns
///
/// Returns the [`CommissionSplit`], or `CalculationError` when an amount
/// does not fit an i64.
///
/// # Examples
///
/// ```
/// use rental_engine::calculation::split_commission;
/// use rental_engine::config::CommissionConfig;
/// use rust_decimal::Decimal;
///
/// let config = CommissionConfig {
///     rate: Decimal::new(30, 2),
///     insurance_share: Decimal::new(5, 1),
///     assistance_fee_per_day: 100,
/// };
///
/// let split = split_commission(3000, 1, &config).unwrap();
/// assert_eq!(split.insurance, 450);
/// assert_eq!(split.assistance, 100);
/// assert_eq!(split.platform, 350);
/// ```
pub fn split_commission(
    base_price: i64,
    duration: u32,
    config: &CommissionConfig,
) -> EngineResult<CommissionSplit> {
    let overflow = |what: &str| EngineError::CalculationError {
        message: format!("{} overflows an i64 for base price {}", what, base_price),
    };

    let platform_fee = (Decimal::from(base_price) * config.rate)
        .trunc()
        .to_i64()
        .ok_or_else(|| overflow("platform fee"))?;

    let insurance = (Decimal::from(platform_fee) * config.insurance_share)
        .trunc()
        .to_i64()
        .ok_or_else(|| overflow("insurance commission"))?;

    let assistance = config.assistance_fee_per_day * i64::from(duration);
    let platform = platform_fee - insurance - assistance;

    Ok(CommissionSplit {
        insurance,
        assistance,
        platform,
    })
}
