//! Settlement action models.
//!
//! This module defines the [`Action`] type representing a single monetary
//! movement, together with the [`Party`] and [`ActionType`] enumerations.

use serde::{Deserialize, Serialize};

/// A party involved in the settlement of a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    /// The driver renting the car.
    Driver,
    /// The owner of the car.
    Owner,
    /// The insurer covering the rental.
    Insurance,
    /// The roadside-assistance provider.
    Assistance,
    /// The platform itself.
    Drivy,
}

/// The direction of a monetary movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Money leaves the party's account.
    Debit,
    /// Money enters the party's account.
    Credit,
}

/// A single monetary movement attributed to a party for a rental.
///
/// Actions are created fresh for every rental and never mutated afterwards.
/// Amounts are in minor currency units.
///
/// # Example
///
/// ```
/// use rental_engine::models::{Action, ActionType, Party};
///
/// let action = Action::debit(Party::Driver, 3700);
/// assert_eq!(action.who, Party::Driver);
/// assert_eq!(action.action_type, ActionType::Debit);
/// assert_eq!(action.amount, 3700);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The party the movement is attributed to.
    pub who: Party,
    /// Whether the party is debited or credited.
    #[serde(rename = "type")]
    pub action_type: ActionType,
    /// The amount moved, in minor currency units.
    pub amount: i64,
}

impl Action {
    /// Creates a debit action for the given party.
    pub fn debit(who: Party, amount: i64) -> Self {
        Self {
            who,
            action_type: ActionType::Debit,
            amount,
        }
    }

    /// Creates a credit action for the given party.
    pub fn credit(who: Party, amount: i64) -> Self {
        Self {
            who,
            action_type: ActionType::Credit,
            amount,
        }
    }
}
