//! User identity value types.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by [`UserId::new`] and [`User::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Identifier was zero or negative.
    NonPositiveId,
    /// Identifier text was not a base-10 integer.
    UnparseableId,
    /// Name was empty after trimming.
    EmptyName,
    /// Age was negative.
    NegativeAge,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId => write!(f, "user id must be a positive integer"),
            Self::UnparseableId => write!(f, "user id must be a base-10 integer"),
            Self::EmptyName => write!(f, "user name must not be empty"),
            Self::NegativeAge => write!(f, "user age must not be negative"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier: a positive integer assigned by the relational
/// store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: i64) -> Result<Self, UserValidationError> {
        if id <= 0 {
            return Err(UserValidationError::NonPositiveId);
        }
        Ok(Self(id))
    }

    /// Parse an identifier from request text (query or path parameter).
    pub fn parse(text: &str) -> Result<Self, UserValidationError> {
        let id: i64 = text
            .trim()
            .parse()
            .map_err(|_| UserValidationError::UnparseableId)?;
        Self::new(id)
    }

    /// Access the raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user as read from the relational store. Immutable for this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier.
    pub user_id: UserId,
    /// Non-empty display name.
    pub name: String,
    /// Optional contact address, unique across users when present.
    pub email: Option<String>,
    /// Age in whole years, never negative.
    pub age: i32,
}

impl User {
    /// Construct a user, validating the store-owned invariants.
    pub fn try_new(
        user_id: UserId,
        name: impl Into<String>,
        email: Option<String>,
        age: i32,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if age < 0 {
            return Err(UserValidationError::NegativeAge);
        }
        Ok(Self {
            user_id,
            name,
            email,
            age,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-5)]
    fn rejects_non_positive_ids(#[case] raw: i64) {
        assert_eq!(UserId::new(raw), Err(UserValidationError::NonPositiveId));
    }

    #[rstest]
    #[case("35", 35)]
    #[case(" 123 ", 123)]
    fn parses_identifier_text(#[case] text: &str, #[case] expected: i64) {
        let id = UserId::parse(text).expect("valid id text");
        assert_eq!(id.get(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("12.5")]
    #[case("")]
    fn rejects_non_integer_text(#[case] text: &str) {
        assert_eq!(UserId::parse(text), Err(UserValidationError::UnparseableId));
    }

    #[test]
    fn user_id_serializes_as_integer() {
        let id = UserId::new(35).expect("valid id");
        assert_eq!(serde_json::to_value(id).expect("serializes"), 35);
    }

    #[test]
    fn rejects_blank_name() {
        let id = UserId::new(1).expect("valid id");
        let result = User::try_new(id, "   ", None, 30);
        assert_eq!(result, Err(UserValidationError::EmptyName));
    }

    #[test]
    fn rejects_negative_age() {
        let id = UserId::new(1).expect("valid id");
        let result = User::try_new(id, "Tracy Orozco", None, -1);
        assert_eq!(result, Err(UserValidationError::NegativeAge));
    }
}
