//! Calculation logic for the Pricing and Settlement Engine.
//!
//! This module contains all the calculation functions for pricing and
//! settling rentals, including rental duration, the per-day discount
//! schedule, base price computation, option surcharge accumulation, the
//! commission split, settlement action construction, and the per-rental
//! aggregation that ties them together.

mod aggregator;
mod base_price;
mod commission;
mod discount;
mod duration;
mod options;
mod settlement;

pub use aggregator::{settle_batch, settle_rental};
pub use base_price::calculate_base_price;
pub use commission::{CommissionSplit, split_commission};
pub use discount::discount_multiplier;
pub use duration::rental_duration;
pub use options::{OptionExtras, calculate_option_extras};
pub use settlement::build_settlement;
