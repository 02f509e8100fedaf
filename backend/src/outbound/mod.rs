//! Outbound adapters implementing domain ports over concrete stores.

pub mod documents;
pub mod persistence;
