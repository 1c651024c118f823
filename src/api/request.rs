//! Request types for the Pricing and Settlement Engine API.
//!
//! This module defines the JSON request structures for the `/settlements`
//! endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Car, Rental, RentalOption};

/// Request body for the `/settlements` endpoint.
///
/// Contains the car catalog and the rentals to settle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// The cars available on the marketplace.
    pub cars: Vec<CarRequest>,
    /// The rentals to settle.
    pub rentals: Vec<RentalRequest>,
}

/// Car information in a settlement request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarRequest {
    /// Unique identifier for the car.
    pub id: i64,
    /// Rental rate per day, in minor currency units.
    pub price_per_day: i64,
    /// Rental rate per kilometer driven, in minor currency units.
    pub price_per_km: i64,
}

/// Rental information in a settlement request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalRequest {
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

impl From<CarRequest> for Car {
    fn from(req: CarRequest) -> Self {
        Car {
            id: req.id,
            price_per_day: req.price_per_day,
            price_per_km: req.price_per_km,
        }
    }
}

impl From<RentalRequest> for Rental {
    fn from(req: RentalRequest) -> Self {
        Rental {
            id: req.id,
            car_id: req.car_id,
            start_date: req.start_date,
            end_date: req.end_date,
            distance: req.distance,
            options: req.options,
        }
    }
}
