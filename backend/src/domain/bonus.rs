//! Bonus ledger: validation and duplicate-safe persistence of bonus records.

use std::sync::Arc;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::money::round_money;
use crate::domain::ports::{BonusInsert, BonusStore, BonusStoreError};
use crate::domain::{Error, UserId};

/// Spending total at or above which a user qualifies for a bonus.
///
/// The comparison is inclusive: a total of exactly 2000 qualifies.
pub const BONUS_THRESHOLD: i64 = 2000;

/// A persisted fact that a user qualified for a spending bonus.
///
/// Write-once per user; the document store enforces uniqueness on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusRecord {
    /// Qualifying user.
    pub user_id: UserId,
    /// Total spending at qualification time, at least [`BONUS_THRESHOLD`].
    pub total_spending: BigDecimal,
    /// When the qualification was recorded.
    pub created_at: DateTime<Utc>,
}

/// Validates and idempotently persists bonus-eligible users.
#[derive(Clone)]
pub struct BonusLedger {
    store: Arc<dyn BonusStore>,
}

fn map_store_error(error: BonusStoreError) -> Error {
    Error::store(error.to_string())
}

fn conflict_for(user_id: UserId) -> Error {
    Error::conflict(format!("Bonus already exists for user {user_id}"))
}

impl BonusLedger {
    /// Create the ledger over a bonus store port.
    pub fn new(store: Arc<dyn BonusStore>) -> Self {
        Self { store }
    }

    /// Record a bonus for a user, exactly once.
    ///
    /// Checks run in order and the first failure wins: an existing record is
    /// `Conflict` (naming the user), a total below [`BONUS_THRESHOLD`] is
    /// `ThresholdNotMet`. The existence check is only an early exit; the
    /// store's insert-if-absent is what actually prevents duplicates, so a
    /// lost race also reports `Conflict` and retrying after success is
    /// always safe.
    pub async fn record_bonus(
        &self,
        user_id: UserId,
        total_spending: BigDecimal,
    ) -> Result<BonusRecord, Error> {
        let existing = self
            .store
            .find_bonus_by_user_id(user_id)
            .await
            .map_err(map_store_error)?;
        if existing.is_some() {
            return Err(conflict_for(user_id));
        }

        if total_spending < BigDecimal::from(BONUS_THRESHOLD) {
            return Err(Error::threshold_not_met(format!(
                "Total spending {} is below the bonus threshold of {BONUS_THRESHOLD}",
                round_money(&total_spending)
            )));
        }

        let record = BonusRecord {
            user_id,
            total_spending: round_money(&total_spending),
            created_at: Utc::now(),
        };

        match self
            .store
            .insert_bonus(&record)
            .await
            .map_err(map_store_error)?
        {
            BonusInsert::Inserted => Ok(record),
            BonusInsert::AlreadyExists => Err(conflict_for(user_id)),
        }
    }
}
