//! Port abstraction over the relational store of users and spending history.
//!
//! The aggregation service performs no I/O itself; adapters implement this
//! trait over PostgreSQL in production and over an in-memory map in tests
//! and store-less deployments.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{SpendingRecord, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by relational store adapters.
    pub enum UserStoreError {
        /// Store connection could not be established or checked out.
        Connection { message: String } => "user store connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "user store query failed: {message}",
    }
}

/// Read-only port over the relational source of truth.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError>;

    /// Fetch every spending record for a user. Zero rows is a valid result.
    async fn list_spending_by_user_id(
        &self,
        id: UserId,
    ) -> Result<Vec<SpendingRecord>, UserStoreError>;

    /// List all users.
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError>;
}

/// In-memory [`UserStore`] backed by a map; serves tests and deployments
/// without a configured database.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    state: Mutex<InMemoryUserState>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: BTreeMap<UserId, User>,
    spending: BTreeMap<UserId, Vec<SpendingRecord>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user, replacing any previous entry with the same id.
    pub fn insert_user(&self, user: User) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.users.insert(user.user_id, user);
    }

    /// Append a spending record for its user.
    pub fn insert_spending(&self, record: SpendingRecord) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.spending.entry(record.user_id).or_default().push(record);
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        Ok(state.users.get(&id).cloned())
    }

    async fn list_spending_by_user_id(
        &self,
        id: UserId,
    ) -> Result<Vec<SpendingRecord>, UserStoreError> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        Ok(state.spending.get(&id).cloned().unwrap_or_default())
    }

    async fn list_users(&self) -> Result<Vec<User>, UserStoreError> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        Ok(state.users.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use rstest::rstest;

    fn sample_user(id: i64) -> User {
        let user_id = UserId::new(id).expect("valid id");
        User::try_new(user_id, "Tracy Orozco", None, 36).expect("valid user")
    }

    #[rstest]
    #[tokio::test]
    async fn find_returns_inserted_user() {
        let store = InMemoryUserStore::new();
        store.insert_user(sample_user(35));

        let found = store
            .find_user_by_id(UserId::new(35).expect("valid id"))
            .await
            .expect("lookup succeeds");
        assert_eq!(found.map(|u| u.name), Some("Tracy Orozco".to_owned()));
    }

    #[rstest]
    #[tokio::test]
    async fn missing_user_yields_none_and_empty_spending() {
        let store = InMemoryUserStore::new();
        let id = UserId::new(1).expect("valid id");

        assert!(store.find_user_by_id(id).await.expect("lookup").is_none());
        assert!(
            store
                .list_spending_by_user_id(id)
                .await
                .expect("listing")
                .is_empty()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn spending_records_accumulate_per_user() {
        let store = InMemoryUserStore::new();
        let user = sample_user(35);
        let id = user.user_id;
        store.insert_user(user);
        for year in [2022, 2023] {
            let record = SpendingRecord::try_new(id, BigDecimal::from(100), year)
                .expect("valid record");
            store.insert_spending(record);
        }

        let records = store.list_spending_by_user_id(id).await.expect("listing");
        assert_eq!(records.len(), 2);
    }
}
