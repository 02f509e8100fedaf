//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain services constructed over ports, never on concrete stores.

use std::sync::Arc;

use crate::domain::ports::UserStore;
use crate::domain::{BonusLedger, SpendingAnalytics};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Aggregation engine over the relational store.
    pub analytics: SpendingAnalytics,
    /// Bonus ledger over the document store.
    pub bonus: BonusLedger,
    /// Direct read port for the user listing endpoints.
    pub users: Arc<dyn UserStore>,
}

impl HttpState {
    /// Bundle the domain services behind one handler state.
    pub fn new(analytics: SpendingAnalytics, bonus: BonusLedger, users: Arc<dyn UserStore>) -> Self {
        Self {
            analytics,
            bonus,
            users,
        }
    }
}
