//! Per-rental aggregation functionality.
//!
//! This module resolves each rental's car and runs the pricing stages in
//! order, producing the per-rental settlement records.

use crate::config::PricingConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Car, Rental, RentalSettlement, SettlementBatch, SettlementFailure};

use super::base_price::calculate_base_price;
use super::commission::split_commission;
use super::duration::rental_duration;
use super::options::calculate_option_extras;
use super::settlement::build_settlement;

/// Settles a single rental.
///
/// Resolves the rental's car, computes the duration, base price, option
/// surcharges and commission split, and assembles the settlement actions.
///
/// # Arguments
///
/// * `rental` - The rental to settle
/// * `cars` - The car catalog; the first car with a matching ID is used
/// * `config` - The pricing configuration
///
/// # Returns
///
/// The rental's settlement record, or an error if the car is unknown
/// (`CarNotFound`), the period is inverted (`InvalidDateRange`), or an
/// amount overflows (`CalculationError`).
///
/// # Examples
///
/// ```no_run
/// use rental_engine::calculation::settle_rental;
/// use rental_engine::config::ConfigLoader;
/// use rental_engine::models::{Car, Rental};
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/marketplace").unwrap();
/// let cars = vec![Car { id: 1, price_per_day: 2000, price_per_km: 10 }];
/// let rental = Rental {
///     id: 1,
///     car_id: 1,
///     start_date: NaiveDate::from_ymd_opt(2015, 12, 8).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2015, 12, 8).unwrap(),
///     distance: 100,
///     options: vec![],
/// };
///
/// let settlement = settle_rental(&rental, &cars, loader.config()).unwrap();
/// assert_eq!(settlement.actions.len(), 5);
/// ```
pub fn settle_rental(
    rental: &Rental,
    cars: &[Car],
    config: &PricingConfig,
) -> EngineResult<RentalSettlement> {
    let car = cars
        .iter()
        .find(|car| car.id == rental.car_id)
        .ok_or(EngineError::CarNotFound {
            rental_id: rental.id,
            car_id: rental.car_id,
        })?;

    let duration = rental_duration(rental.start_date, rental.end_date)?;
    let base_price = calculate_base_price(car, duration, rental.distance, config.tiers())?;
    let extras = calculate_option_extras(&rental.options, duration, config.options())?;
    let split = split_commission(base_price, duration, config.commission())?;
    let actions = build_settlement(base_price, &extras, &split, config.commission())?;

    Ok(RentalSettlement {
        id: rental.id,
        options: rental.options.clone(),
        actions,
    })
}

/// Settles a batch of rentals.
///
/// Every rental is computed independently; a rental that fails is recorded
/// as a [`SettlementFailure`] beside the successful settlements instead of
/// aborting the batch.
///
/// # Arguments
///
/// * `cars` - The car catalog
/// * `rentals` - The rentals to settle
/// * `config` - The pricing configuration
///
/// # Returns
///
/// The batch result, with settlements and failures both in input order.
pub fn settle_batch(cars: &[Car], rentals: &[Rental], config: &PricingConfig) -> SettlementBatch {
    let mut settlements = Vec::with_capacity(rentals.len());
    let mut failures = Vec::new();

    for rental in rentals {
        match settle_rental(rental, cars, config) {
            Ok(settlement) => settlements.push(settlement),
            Err(error) => failures.push(SettlementFailure {
                rental_id: rental.id,
                error: error.to_string(),
            }),
        }
    }

    SettlementBatch {
        rentals: settlements,
        failures,
    }
}
