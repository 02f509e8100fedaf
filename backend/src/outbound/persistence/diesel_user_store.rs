//! PostgreSQL-backed `UserStore` implementation using Diesel.
//!
//! A thin adapter: parameterized reads over `users` and `spending_records`,
//! row-to-domain conversion, and error mapping. No business logic.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{SpendingRecord, User, UserId};

use super::models::{SpendingRecordRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{spending_records, users};

/// Diesel-backed implementation of the `UserStore` port.
#[derive(Clone)]
pub struct DieselUserStore {
    pool: DbPool,
}

impl DieselUserStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserStoreError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserStoreError::connection("database connection error")
        }
        _ => UserStoreError::query("database error"),
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserStoreError> {
    let user_id = UserId::new(row.id)
        .map_err(|err| UserStoreError::query(format!("corrupted user id in database: {err}")))?;
    User::try_new(user_id, row.name, row.email, row.age)
        .map_err(|err| UserStoreError::query(format!("corrupted user row in database: {err}")))
}

fn row_to_record(row: SpendingRecordRow) -> Result<SpendingRecord, UserStoreError> {
    let user_id = UserId::new(row.user_id)
        .map_err(|err| UserStoreError::query(format!("corrupted user id in database: {err}")))?;
    SpendingRecord::try_new(user_id, row.amount, row.year)
        .map_err(|err| UserStoreError::query(format!("corrupted spending row in database: {err}")))
}

#[async_trait]
impl UserStore for DieselUserStore {
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.get()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn list_spending_by_user_id(
        &self,
        id: UserId,
    ) -> Result<Vec<SpendingRecord>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<SpendingRecordRow> = spending_records::table
            .filter(spending_records::user_id.eq(id.get()))
            .order(spending_records::year.asc())
            .select(SpendingRecordRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn list_users(&self) -> Result<Vec<User>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_user).collect()
    }
}
