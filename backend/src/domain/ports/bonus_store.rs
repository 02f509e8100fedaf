//! Port abstraction over the secondary document store of bonus records.
//!
//! The store-level uniqueness guarantee lives behind [`BonusStore::insert_bonus`]:
//! an implementation must insert atomically-if-absent (Redis `SET NX`, a
//! unique index, or equivalent) and report which side of the race it won.
//! The in-process existence check in the ledger service is an early exit
//! only, never the correctness mechanism.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::bonus::BonusRecord;
use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by document store adapters.
    pub enum BonusStoreError {
        /// Store connection could not be established or checked out.
        Connection { message: String } => "bonus store connection failed: {message}",
        /// Command failed during execution.
        Command { message: String } => "bonus store command failed: {message}",
        /// Stored document could not be decoded.
        Corrupt { message: String } => "bonus store document corrupt: {message}",
    }
}

/// Outcome of an insert-if-absent against the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusInsert {
    /// The record was written; this call owns the only copy.
    Inserted,
    /// A record for this user already existed; nothing was written.
    AlreadyExists,
}

/// Append-only port over the bonus-record collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BonusStore: Send + Sync {
    /// Fetch the bonus record for a user, if one exists.
    async fn find_bonus_by_user_id(
        &self,
        id: UserId,
    ) -> Result<Option<BonusRecord>, BonusStoreError>;

    /// Insert a record unless one already exists for the same user.
    async fn insert_bonus(&self, record: &BonusRecord) -> Result<BonusInsert, BonusStoreError>;
}

/// In-memory [`BonusStore`] with the same insert-if-absent semantics as the
/// Redis adapter; serves tests and store-less deployments.
#[derive(Debug, Default)]
pub struct InMemoryBonusStore {
    records: Mutex<BTreeMap<UserId, BonusRecord>>,
}

impl InMemoryBonusStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BonusStore for InMemoryBonusStore {
    async fn find_bonus_by_user_id(
        &self,
        id: UserId,
    ) -> Result<Option<BonusRecord>, BonusStoreError> {
        let records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        Ok(records.get(&id).cloned())
    }

    async fn insert_bonus(&self, record: &BonusRecord) -> Result<BonusInsert, BonusStoreError> {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        if records.contains_key(&record.user_id) {
            return Ok(BonusInsert::AlreadyExists);
        }
        records.insert(record.user_id, record.clone());
        Ok(BonusInsert::Inserted)
    }
}
