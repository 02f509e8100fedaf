//! Domain primitives and services.
//!
//! Transport-agnostic core of the service: value types with documented
//! invariants, the error taxonomy, the aggregation engine, the bonus ledger,
//! and the ports the services depend on. No I/O happens in this module
//! tree; adapters live under `outbound`.

pub mod age_bucket;
pub mod aggregation;
pub mod bonus;
pub mod error;
pub mod money;
pub mod ports;
pub mod spending;
pub mod user;

pub use self::age_bucket::AgeBucket;
pub use self::aggregation::{AverageSpending, SpendingAnalytics, TotalSpending};
pub use self::bonus::{BonusLedger, BonusRecord, BONUS_THRESHOLD};
pub use self::error::{Error, ErrorCode};
pub use self::money::round_money;
pub use self::spending::SpendingRecord;
pub use self::user::{User, UserId, UserValidationError};
