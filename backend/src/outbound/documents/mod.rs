//! Document-store adapters for the bonus-record collection.

mod redis_bonus_store;

pub use redis_bonus_store::RedisBonusStore;
