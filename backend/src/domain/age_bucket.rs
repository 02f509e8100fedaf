//! Age-bucket classification for spending averages.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Named age range attached to per-user spending averages.
///
/// Classification is total over every integer age: the four named ranges
/// cover 18 through 47 inclusive, and everything else falls into
/// [`AgeBucket::Over47`]. That includes ages *below* 18, which the upstream
/// business rule has always lumped into the `">47"` label; the behaviour is
/// kept as-is rather than silently corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum AgeBucket {
    /// Ages 18 through 24.
    #[serde(rename = "18-24")]
    From18To24,
    /// Ages 25 through 30.
    #[serde(rename = "25-30")]
    From25To30,
    /// Ages 31 through 36.
    #[serde(rename = "31-36")]
    From31To36,
    /// Ages 37 through 47.
    #[serde(rename = "37-47")]
    From37To47,
    /// Every other age, including ages below 18.
    #[serde(rename = ">47")]
    Over47,
}

impl AgeBucket {
    /// Classify an age into its bucket. Pure and total over `i32`.
    pub fn classify(age: i32) -> Self {
        match age {
            18..=24 => Self::From18To24,
            25..=30 => Self::From25To30,
            31..=36 => Self::From31To36,
            37..=47 => Self::From37To47,
            _ => Self::Over47,
        }
    }

    /// Wire label for the bucket.
    pub fn label(self) -> &'static str {
        match self {
            Self::From18To24 => "18-24",
            Self::From25To30 => "25-30",
            Self::From31To36 => "31-36",
            Self::From37To47 => "37-47",
            Self::Over47 => ">47",
        }
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(18, AgeBucket::From18To24)]
    #[case(24, AgeBucket::From18To24)]
    #[case(25, AgeBucket::From25To30)]
    #[case(30, AgeBucket::From25To30)]
    #[case(31, AgeBucket::From31To36)]
    #[case(36, AgeBucket::From31To36)]
    #[case(37, AgeBucket::From37To47)]
    #[case(47, AgeBucket::From37To47)]
    #[case(48, AgeBucket::Over47)]
    #[case(90, AgeBucket::Over47)]
    fn boundary_ages_map_to_expected_bucket(#[case] age: i32, #[case] expected: AgeBucket) {
        assert_eq!(AgeBucket::classify(age), expected);
    }

    #[rstest]
    #[case(17)]
    #[case(0)]
    fn ages_below_eighteen_keep_the_legacy_bucket(#[case] age: i32) {
        assert_eq!(AgeBucket::classify(age), AgeBucket::Over47);
        assert_eq!(AgeBucket::classify(age).label(), ">47");
    }

    #[test]
    fn labels_match_wire_serialization() {
        for bucket in [
            AgeBucket::From18To24,
            AgeBucket::From25To30,
            AgeBucket::From31To36,
            AgeBucket::From37To47,
            AgeBucket::Over47,
        ] {
            let serialized = serde_json::to_value(bucket).expect("bucket serializes");
            assert_eq!(serialized, bucket.label());
        }
    }
}
