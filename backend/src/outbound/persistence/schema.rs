//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the deployed schema exactly; Diesel uses
//! them for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Primary key: positive integer identifier.
        id -> BigInt,
        /// Display name, non-empty.
        name -> Varchar,
        /// Optional contact address, unique when present.
        email -> Nullable<Varchar>,
        /// Age in whole years, non-negative.
        age -> Integer,
    }
}

diesel::table! {
    /// Spending history, many rows per user.
    spending_records (id) {
        /// Surrogate primary key.
        id -> BigInt,
        /// Owning user.
        user_id -> BigInt,
        /// Amount spent, non-negative.
        amount -> Numeric,
        /// Calendar year of the spending.
        year -> Integer,
    }
}

diesel::joinable!(spending_records -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(users, spending_records);
