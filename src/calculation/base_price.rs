//! Base price calculation functionality.
//!
//! This module computes a rental's pre-commission price from the car's
//! rates, the rental duration and the distance driven.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::DiscountTier;
use crate::error::{EngineError, EngineResult};
use crate::models::Car;

use super::discount::discount_multiplier;

/// Computes the base price of a rental, in minor currency units.
///
/// Sums the discounted daily charge over every rental day, adds the
/// distance charge, and truncates the total toward zero once at the end.
/// The schedule is piecewise, so the summation is per day; truncating per
/// day instead of once on the total would drift from the exact result.
///
/// # Arguments
///
/// * `car` - The rented car, providing the daily and per-kilometer rates
/// * `duration` - The rental duration in days (≥ 1)
/// * `distance` - The distance driven, in kilometers
/// * `tiers` - The discount schedule
///
/// # Returns
///
/// The truncated total price, or `CalculationError` if the total does not
/// fit an i64.
///
/// # Examples
///
/// ```
/// use rental_engine::calculation::calculate_base_price;
/// use rental_engine::config::DiscountTier;
/// use rental_engine::models::Car;
/// use rust_decimal::Decimal;
///
/// let car = Car { id: 1, price_per_day: 2000, price_per_km: 10 };
/// let tiers = vec![DiscountTier { from_day: 1, multiplier: Decimal::ONE }];
/// assert_eq!(calculate_base_price(&car, 1, 100, &tiers).unwrap(), 3000);
/// ```
pub fn calculate_base_price(
    car: &Car,
    duration: u32,
    distance: i64,
    tiers: &[DiscountTier],
) -> EngineResult<i64> {
    let daily_rate = Decimal::from(car.price_per_day);

    let mut day_charges = Decimal::ZERO;
    for day in 1..=duration {
        day_charges += daily_rate * discount_multiplier(day, tiers);
    }

    let distance_charge = Decimal::from(car.price_per_km) * Decimal::from(distance);
    let total = day_charges + distance_charge;

    total
        .trunc()
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("base price for car {} overflows an i64", car.id),
        })
}
