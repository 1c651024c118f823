//! Core data models for the Pricing and Settlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod action;
mod car;
mod rental;
mod settlement;

pub use action::{Action, ActionType, Party};
pub use car::Car;
pub use rental::{Rental, RentalOption};
pub use settlement::{RentalSettlement, SettlementBatch, SettlementFailure};
