//! Per-day discount schedule functionality.
//!
//! This module evaluates the tiered discount multiplier that makes longer
//! rentals progressively cheaper per day.

use rust_decimal::Decimal;

use crate::config::DiscountTier;

/// Returns the discount multiplier for a given rental day.
///
/// The schedule is evaluated per day: a multi-day rental charges each day at
/// the multiplier of that day's tier, not the whole rental at the final
/// tier's multiplier.
///
/// # Arguments
///
/// * `day` - The 1-based day index within the rental
/// * `tiers` - The discount tiers, sorted by `from_day` ascending
///
/// # Returns
///
/// The multiplier of the last tier whose `from_day` is on or before `day`,
/// or 1.0 when no tier matches.
///
/// # Examples
///
/// ```
/// use rental_engine::calculation::discount_multiplier;
/// use rental_engine::config::DiscountTier;
/// use rust_decimal::Decimal;
///
/// let tiers = vec![
///     DiscountTier { from_day: 1, multiplier: Decimal::new(10, 1) },
///     DiscountTier { from_day: 2, multiplier: Decimal::new(9, 1) },
/// ];
/// assert_eq!(discount_multiplier(1, &tiers), Decimal::new(10, 1));
/// assert_eq!(discount_multiplier(3, &tiers), Decimal::new(9, 1));
/// ```
pub fn discount_multiplier(day: u32, tiers: &[DiscountTier]) -> Decimal {
    tiers
        .iter()
        .rfind(|tier| tier.from_day <= day)
        .map(|tier| tier.multiplier)
        .unwrap_or(Decimal::ONE)
}
