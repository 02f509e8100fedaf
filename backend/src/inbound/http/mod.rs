//! HTTP inbound adapter exposing REST endpoints.

pub mod bonus;
pub mod error;
pub mod health;
pub mod spending;
pub mod state;
#[cfg(test)]
pub mod test_fixtures;
pub mod users;

pub use error::{json_config, path_config, query_config, ApiResult};
