//! Error types for the Pricing and Settlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pricing and settling
//! rentals.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Pricing and Settlement Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use rental_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rental references a car identifier absent from the catalog.
    #[error("Rental {rental_id} references unknown car {car_id}")]
    CarNotFound {
        /// The ID of the rental holding the dangling reference.
        rental_id: i64,
        /// The car ID that was not found.
        car_id: i64,
    },

    /// A rental period ends before it starts.
    #[error("Invalid rental period: end date {end} is before start date {start}")]
    InvalidDateRange {
        /// The start date of the rental.
        start: NaiveDate,
        /// The end date of the rental.
        end: NaiveDate,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_car_not_found_displays_both_ids() {
        let error = EngineError::CarNotFound {
            rental_id: 4,
            car_id: 99,
        };
        assert_eq!(error.to_string(), "Rental 4 references unknown car 99");
    }

    #[test]
    fn test_invalid_date_range_displays_dates() {
        let error = EngineError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2015, 12, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2015, 12, 8).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rental period: end date 2015-12-08 is before start date 2015-12-10"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "base price overflow".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: base price overflow");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_car_not_found() -> EngineResult<()> {
            Err(EngineError::CarNotFound {
                rental_id: 1,
                car_id: 7,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_car_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
