//! Redis-backed `BonusStore` implementation.
//!
//! Bonus records are JSON documents under namespaced keys
//! (`bonus:<user_id>`). Inserts use `SET ... NX`, so uniqueness per user is
//! enforced by the store itself: whichever concurrent insert reaches Redis
//! first wins, and the loser observes `AlreadyExists`. Connections come
//! from a `bb8` pool and return to it on every exit path.

use async_trait::async_trait;
use bb8_redis::bb8;
use bb8_redis::redis;
use bb8_redis::RedisConnectionManager;
use tracing::debug;

use crate::domain::ports::{BonusInsert, BonusStore, BonusStoreError};
use crate::domain::{BonusRecord, UserId};

/// Key prefix for bonus record documents.
const KEY_PREFIX: &str = "bonus";

fn bonus_key(id: UserId) -> String {
    format!("{KEY_PREFIX}:{id}")
}

fn map_pool_error(error: bb8::RunError<redis::RedisError>) -> BonusStoreError {
    BonusStoreError::connection(error.to_string())
}

fn map_redis_error(error: redis::RedisError) -> BonusStoreError {
    debug!(error = %error, "redis command failed");
    if error.is_connection_refusal() || error.is_connection_dropped() || error.is_timeout() {
        BonusStoreError::connection(error.to_string())
    } else {
        BonusStoreError::command(error.to_string())
    }
}

fn decode_document(raw: &str) -> Result<BonusRecord, BonusStoreError> {
    serde_json::from_str(raw).map_err(|err| BonusStoreError::corrupt(err.to_string()))
}

fn encode_document(record: &BonusRecord) -> Result<String, BonusStoreError> {
    serde_json::to_string(record).map_err(|err| BonusStoreError::corrupt(err.to_string()))
}

/// Redis-backed implementation of the `BonusStore` port.
#[derive(Clone)]
pub struct RedisBonusStore {
    pool: bb8::Pool<RedisConnectionManager>,
}

impl RedisBonusStore {
    /// Build a pooled client for the given Redis URL.
    ///
    /// # Errors
    ///
    /// Returns a connection error when the URL is malformed or the pool
    /// cannot be constructed.
    pub async fn connect(redis_url: &str) -> Result<Self, BonusStoreError> {
        let manager = RedisConnectionManager::new(redis_url)
            .map_err(|err| BonusStoreError::connection(err.to_string()))?;
        let pool = bb8::Pool::builder()
            .build(manager)
            .await
            .map_err(|err| BonusStoreError::connection(err.to_string()))?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl BonusStore for RedisBonusStore {
    async fn find_bonus_by_user_id(
        &self,
        id: UserId,
    ) -> Result<Option<BonusRecord>, BonusStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let raw: Option<String> = redis::cmd("GET")
            .arg(bonus_key(id))
            .query_async(&mut *conn)
            .await
            .map_err(map_redis_error)?;

        raw.as_deref().map(decode_document).transpose()
    }

    async fn insert_bonus(&self, record: &BonusRecord) -> Result<BonusInsert, BonusStoreError> {
        let document = encode_document(record)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // SET NX replies OK when the key was written and nil when it already
        // existed; this is the atomic insert-if-absent the port requires.
        let reply: Option<String> = redis::cmd("SET")
            .arg(bonus_key(record.user_id))
            .arg(document)
            .arg("NX")
            .query_async(&mut *conn)
            .await
            .map_err(map_redis_error)?;

        Ok(match reply {
            Some(_) => BonusInsert::Inserted,
            None => BonusInsert::AlreadyExists,
        })
    }
}
