//! Rental model and related types.
//!
//! This module defines the [`Rental`] struct and the closed [`RentalOption`]
//! enumeration of bookable extras.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An extra a driver can book alongside a rental.
///
/// The set of options is closed: unknown option names are rejected at
/// deserialization time. Per-day rates and beneficiaries for each option
/// come from the pricing configuration.
///
/// # Example
///
/// ```
/// use rental_engine::models::RentalOption;
///
/// let option: RentalOption = serde_json::from_str("\"baby_seat\"").unwrap();
/// assert_eq!(option, RentalOption::BabySeat);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalOption {
    /// GPS navigation unit.
    Gps,
    /// Baby seat.
    BabySeat,
    /// Additional insurance cover.
    AdditionalInsurance,
}

impl RentalOption {
    /// Every bookable option, in catalog order.
    pub const ALL: [RentalOption; 3] = [
        RentalOption::Gps,
        RentalOption::BabySeat,
        RentalOption::AdditionalInsurance,
    ];

    /// Returns the wire name of the option.
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalOption::Gps => "gps",
            RentalOption::BabySeat => "baby_seat",
            RentalOption::AdditionalInsurance => "additional_insurance",
        }
    }
}

/// A rental booked by a driver.
///
/// Derived values such as duration, base price and settlement actions are
/// computed by the calculation layer at settlement time; they are never
/// stored on the input record.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rental_engine::models::{Rental, RentalOption};
///
/// let rental = Rental {
///     id: 1,
///     car_id: 1,
///     start_date: NaiveDate::from_ymd_opt(2015, 12, 8).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2015, 12, 8).unwrap(),
///     distance: 100,
///     options: vec![RentalOption::Gps, RentalOption::BabySeat],
/// };
/// assert_eq!(rental.options.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    /// Unique identifier for the rental.
    pub id: i64,
    /// The ID of the rented car.
    pub car_id: i64,
    /// The first day of the rental (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the rental (inclusive).
    pub end_date: NaiveDate,
    /// Distance driven over the rental, in kilometers.
    pub distance: i64,
    /// Options booked for this rental.
    #[serde(default)]
    pub options: Vec<RentalOption>,
}
