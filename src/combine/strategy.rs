//! Combination strategies

use crate::error::ScaleRuleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How per-rule results are folded into one number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CombineStrategy {
    /// Value of the last kept result
    #[default]
    LastOne,
    /// Value of the first kept result
    FirstOne,
    /// Uniform pick among kept results
    Random,
    /// Sum divided by count
    Average,
    Maximum,
    Minimum,
    Sum,
    /// Number of matches after the first one
    Intersections,
    /// Panics if more than one kept rule matched
    IntersectionFatal,
}

impl CombineStrategy {
    pub const ALL: [CombineStrategy; 9] = [
        CombineStrategy::LastOne,
        CombineStrategy::FirstOne,
        CombineStrategy::Random,
        CombineStrategy::Average,
        CombineStrategy::Maximum,
        CombineStrategy::Minimum,
        CombineStrategy::Sum,
        CombineStrategy::Intersections,
        CombineStrategy::IntersectionFatal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::LastOne => "last-one",
            Self::FirstOne => "first-one",
            Self::Random => "random",
            Self::Average => "average",
            Self::Maximum => "maximum",
            Self::Minimum => "minimum",
            Self::Sum => "sum",
            Self::Intersections => "intersections",
            Self::IntersectionFatal => "intersection-fatal",
        }
    }

    /// Legacy numeric code, 1 through 9
    pub fn code(self) -> u8 {
        match self {
            Self::LastOne => 1,
            Self::FirstOne => 2,
            Self::Random => 3,
            Self::Average => 4,
            Self::Maximum => 5,
            Self::Minimum => 6,
            Self::Sum => 7,
            Self::Intersections => 8,
            Self::IntersectionFatal => 9,
        }
    }
}

impl fmt::Display for CombineStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CombineStrategy {
    type Err = ScaleRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| ScaleRuleError::UnknownStrategy(s.to_string()))
    }
}

impl TryFrom<u8> for CombineStrategy {
    type Error = ScaleRuleError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.code() == code)
            .ok_or_else(|| ScaleRuleError::UnknownStrategy(code.to_string()))
    }
}
