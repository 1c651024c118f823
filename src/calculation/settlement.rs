//! Settlement action construction functionality.
//!
//! This module assembles the five monetary actions that distribute a
//! rental's price among the parties.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::CommissionConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Action, Party};

use super::commission::CommissionSplit;
use super::options::OptionExtras;

/// Builds the settlement actions for a rental.
///
/// Produces exactly five actions, in fixed order:
/// 1. driver debit: base price plus all option surcharges
/// 2. owner credit: the owner's share of the base price plus the owner-side
///    surcharges
/// 3. insurance credit
/// 4. assistance credit
/// 5. drivy credit: the platform residual plus the platform-side surcharges
///
/// The owner's share is truncated toward zero, matching the truncation of
/// the platform fee so that the credits net to the driver's debit.
///
/// # Arguments
///
/// * `base_price` - The rental's base price, in minor units
/// * `extras` - The option surcharges, split by beneficiary
/// * `split` - The commission split of the platform fee
/// * `commission` - The commission parameters, providing the owner's share
///
/// # Returns
///
/// The five actions, or `CalculationError` when the owner's credit does not
/// fit an i64.
pub fn build_settlement(
    base_price: i64,
    extras: &OptionExtras,
    split: &CommissionSplit,
    commission: &CommissionConfig,
) -> EngineResult<Vec<Action>> {
    let owner_share = (Decimal::from(base_price) * commission.owner_share())
        .trunc()
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("owner credit overflows an i64 for base price {}", base_price),
        })?;

    Ok(vec![
        Action::debit(Party::Driver, base_price + extras.total()),
        Action::credit(Party::Owner, owner_share + extras.owner_extra),
        Action::credit(Party::Insurance, split.insurance),
        Action::credit(Party::Assistance, split.assistance),
        Action::credit(Party::Drivy, split.platform + extras.platform_extra),
    ])
}
