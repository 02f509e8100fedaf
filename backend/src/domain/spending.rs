//! Spending history value types.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// A single spending entry for a user, as read from the relational store.
///
/// Amounts are never negative; the store owns that invariant and the
/// constructor re-checks it so a corrupted row cannot poison an aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingRecord {
    /// Owning user.
    pub user_id: UserId,
    /// Amount spent, non-negative decimal.
    pub amount: BigDecimal,
    /// Calendar year the spending was recorded in.
    pub year: i32,
}

/// Error raised when a spending row violates the non-negative amount rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("spending amount must not be negative")]
pub struct NegativeAmountError;

impl SpendingRecord {
    /// Construct a record, rejecting negative amounts.
    pub fn try_new(
        user_id: UserId,
        amount: BigDecimal,
        year: i32,
    ) -> Result<Self, NegativeAmountError> {
        if amount < BigDecimal::from(0) {
            return Err(NegativeAmountError);
        }
        Ok(Self {
            user_id,
            amount,
            year,
        })
    }
}
