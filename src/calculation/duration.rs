//! Rental duration calculation functionality.
//!
//! This module provides the function for deriving the inclusive day count
//! of a rental from its start and end dates.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Computes the inclusive number of days between two dates.
///
/// Both bounds count: a rental starting and ending on the same day lasts
/// one day.
///
/// # Arguments
///
/// * `start` - The first day of the rental
/// * `end` - The last day of the rental
///
/// # Returns
///
/// Returns the duration in days (always ≥ 1), or `InvalidDateRange` if the
/// end date is before the start date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rental_engine::calculation::rental_duration;
///
/// let start = NaiveDate::from_ymd_opt(2015, 12, 8).unwrap();
/// let end = NaiveDate::from_ymd_opt(2015, 12, 10).unwrap();
/// assert_eq!(rental_duration(start, end).unwrap(), 3);
/// ```
pub fn rental_duration(start: NaiveDate, end: NaiveDate) -> EngineResult<u32> {
    let spanned_days = (end - start).num_days();
    if spanned_days < 0 {
        return Err(EngineError::InvalidDateRange { start, end });
    }

    Ok(spanned_days as u32 + 1)
}
