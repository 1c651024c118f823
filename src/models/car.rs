//! Car model.
//!
//! This module defines the [`Car`] struct describing a vehicle listed on the
//! marketplace and its pricing rates.

use serde::{Deserialize, Serialize};

/// A car listed on the marketplace.
///
/// All rates are expressed in minor currency units (cents). Cars are
/// immutable once deserialized; the engine never modifies them.
///
/// # Example
///
/// ```
/// use rental_engine::models::Car;
///
/// let car = Car {
///     id: 1,
///     price_per_day: 2000,
///     price_per_km: 10,
/// };
/// assert_eq!(car.price_per_day, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Unique identifier for the car.
    pub id: i64,
    /// Rental rate per day, in minor currency units.
    pub price_per_day: i64,
    /// Rental rate per kilometer driven, in minor currency units.
    pub price_per_km: i64,
}
