//! Only-filter: which per-rule results take part in the fold

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnlyFilter {
    /// Keep every result
    #[default]
    All,
    /// Keep results of rules whose condition matched
    Matched,
    /// Keep results of rules whose condition did not match
    Unmatched,
}

impl OnlyFilter {
    #[inline]
    pub fn keeps(self, matched: bool) -> bool {
        match self {
            Self::All => true,
            Self::Matched => matched,
            Self::Unmatched => !matched,
        }
    }
}

impl From<bool> for OnlyFilter {
    fn from(only_matched: bool) -> Self {
        if only_matched {
            Self::Matched
        } else {
            Self::Unmatched
        }
    }
}

impl From<Option<bool>> for OnlyFilter {
    fn from(only_matched: Option<bool>) -> Self {
        only_matched.map_or(Self::All, Self::from)
    }
}
