//! Pricing and Settlement Engine for a car-sharing marketplace
//!
//! This crate prices rentals from car rates and rental periods, applies
//! option surcharges, and splits every rental's price into balanced
//! settlement actions for the driver, the car owner, the insurer, the
//! roadside-assistance provider and the platform.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
