//! Aggregation engine: spending totals and per-user averages.
//!
//! Pure reads over the [`UserStore`] port. The service owns the `NotFound`
//! and `NoData` rules; store failures surface as `StoreError` and are never
//! leaked as raw driver errors.

use std::sync::Arc;

use bigdecimal::BigDecimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::money::round_money;
use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{AgeBucket, Error, UserId};

/// Total spending for one user, carrying identity fields so callers need no
/// second lookup.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TotalSpending {
    /// Subject user.
    pub user_id: UserId,
    /// User's display name.
    pub name: String,
    /// User's age in whole years.
    pub age: i32,
    /// Sum of all spending amounts, rounded half-up to 2 decimal places.
    #[schema(value_type = String, example = "1200.46")]
    pub total_spending: BigDecimal,
}

/// Per-user average spending labelled with the user's age bucket.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AverageSpending {
    /// Subject user.
    pub user_id: UserId,
    /// User's age in whole years.
    pub age: i32,
    /// Arithmetic mean of the user's spending amounts, rounded half-up to 2
    /// decimal places.
    #[schema(value_type = String, example = "175.28")]
    pub average_spending: BigDecimal,
    /// Bucket label derived from the user's age.
    pub age_group: AgeBucket,
}

/// Read-only aggregation service over the relational store.
#[derive(Clone)]
pub struct SpendingAnalytics {
    store: Arc<dyn UserStore>,
}

fn map_store_error(error: UserStoreError) -> Error {
    Error::store(error.to_string())
}

impl SpendingAnalytics {
    /// Create the service over a user store port.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Sum a user's spending. A user with zero records totals `0.00`; only a
    /// missing user is an error.
    pub async fn total_spending(&self, user_id: UserId) -> Result<TotalSpending, Error> {
        let user = self
            .store
            .find_user_by_id(user_id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found("User not found"))?;

        let records = self
            .store
            .list_spending_by_user_id(user_id)
            .await
            .map_err(map_store_error)?;

        let total: BigDecimal = records.into_iter().map(|record| record.amount).sum();

        Ok(TotalSpending {
            user_id,
            name: user.name,
            age: user.age,
            total_spending: round_money(&total),
        })
    }

    /// Average a user's spending and label it with the user's age bucket.
    ///
    /// The mean is over that user's own records; the bucket is a label, not
    /// a population grouping. Zero records is `NoData`, distinct from a
    /// missing user, and never reported as a silent zero.
    pub async fn average_spending_by_age(&self, user_id: UserId) -> Result<AverageSpending, Error> {
        let user = self
            .store
            .find_user_by_id(user_id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found("User not found"))?;

        let records = self
            .store
            .list_spending_by_user_id(user_id)
            .await
            .map_err(map_store_error)?;

        if records.is_empty() {
            return Err(Error::no_data(format!(
                "No spending data for user {user_id}"
            )));
        }

        let count = i64::try_from(records.len())
            .map_err(|_| Error::store("spending record count overflow"))?;
        let total: BigDecimal = records.into_iter().map(|record| record.amount).sum();
        let average = total / BigDecimal::from(count);

        Ok(AverageSpending {
            user_id,
            age: user.age,
            average_spending: round_money(&average),
            age_group: AgeBucket::classify(user.age),
        })
    }
}
