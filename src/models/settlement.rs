//! Settlement result models.
//!
//! This module contains the per-rental [`RentalSettlement`] record and the
//! [`SettlementBatch`] wrapper produced by a full run of the engine.

use serde::{Deserialize, Serialize};

use super::{Action, RentalOption};

/// The settlement breakdown for a single rental.
///
/// Holds the rental's applicable options and the five monetary actions
/// distributing the rental price among the parties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalSettlement {
    /// The ID of the settled rental.
    pub id: i64,
    /// The options that applied to the rental, in input order.
    pub options: Vec<RentalOption>,
    /// The monetary actions, in fixed order: driver debit, then owner,
    /// insurance, assistance and drivy credits.
    pub actions: Vec<Action>,
}

/// A rental the engine could not settle.
///
/// Recorded beside the successful settlements so that one bad record does
/// not abort the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementFailure {
    /// The ID of the rental that failed.
    pub rental_id: i64,
    /// A description of what went wrong.
    pub error: String,
}

/// The result of settling a batch of rentals.
///
/// Serializes to `{"rentals": [...]}`; the `failures` list is omitted when
/// every rental settled cleanly, keeping the output identical to consumers
/// that only expect successful settlements.
///
/// # Example
///
/// ```
/// use rental_engine::models::SettlementBatch;
///
/// let batch = SettlementBatch {
///     rentals: vec![],
///     failures: vec![],
/// };
/// assert_eq!(serde_json::to_string(&batch).unwrap(), r#"{"rentals":[]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementBatch {
    /// The successfully settled rentals, in input order.
    pub rentals: Vec<RentalSettlement>,
    /// Rentals that could not be settled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<SettlementFailure>,
}
