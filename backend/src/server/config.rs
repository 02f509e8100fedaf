//! Application settings loaded via OrthoConfig.
//!
//! The bind address carries a declared default so loading succeeds with no
//! configuration at all; the store URLs stay optional and their absence
//! selects the in-memory adapters. Settings come from CLI flags,
//! `SPENDING_*` environment variables, or a config file, in OrthoConfig's
//! usual precedence order.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Runtime configuration for the HTTP server and its stores.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SPENDING")]
pub struct AppSettings {
    /// Socket address the server binds to.
    #[ortho_config(default = "0.0.0.0:8080".to_owned())]
    pub bind_addr: String,
    /// PostgreSQL connection URL; absent means the in-memory user store.
    pub database_url: Option<String>,
    /// Redis connection URL; absent means the in-memory bonus store.
    pub redis_url: Option<String>,
}

impl AppSettings {
    /// Return the configured bind address.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_str()
    }
}
