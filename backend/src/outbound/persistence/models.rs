//! Internal Diesel row structs for database reads.
//!
//! Implementation details of the persistence layer, never exposed to the
//! domain. Conversion into domain types re-validates the store-owned
//! invariants so a bad row fails loudly instead of poisoning an aggregate.

use bigdecimal::BigDecimal;
use diesel::prelude::*;

use super::schema::{spending_records, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub age: i32,
}

/// Row struct for reading from the spending_records table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = spending_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SpendingRecordRow {
    #[expect(dead_code, reason = "surrogate key is not part of the domain model")]
    pub id: i64,
    pub user_id: i64,
    pub amount: BigDecimal,
    pub year: i32,
}
