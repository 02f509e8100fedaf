//! PostgreSQL persistence adapter using Diesel.
//!
//! Concrete implementation of the `UserStore` port backed by PostgreSQL via
//! Diesel with async support through `diesel-async` and `bb8` pooling.
//!
//! - **Thin adapter**: only translates between Diesel rows and domain
//!   types; no business logic resides here.
//! - **Internal models**: row structs and schema definitions never leave
//!   this module.
//! - **Strongly typed errors**: all database errors are mapped to the
//!   port's error type.

mod diesel_user_store;
mod models;
mod pool;
mod schema;

pub use diesel_user_store::DieselUserStore;
pub use pool::{DbPool, PoolConfig, PoolError};
