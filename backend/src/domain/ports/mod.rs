//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod bonus_store;
mod user_store;

#[cfg(test)]
pub use bonus_store::MockBonusStore;
pub use bonus_store::{BonusInsert, BonusStore, BonusStoreError, InMemoryBonusStore};
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::{InMemoryUserStore, UserStore, UserStoreError};
