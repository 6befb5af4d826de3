//! Combination configuration

use crate::combine::filter::OnlyFilter;
use crate::combine::strategy::CombineStrategy;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Strategy and filter for one combine call.
///
/// Passed by value into every evaluation, so changing it never races an
/// evaluation in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CombineConfig {
    pub strategy: CombineStrategy,
    pub only: OnlyFilter,
}

impl CombineConfig {
    pub fn new(strategy: CombineStrategy) -> Self {
        Self {
            strategy,
            only: OnlyFilter::All,
        }
    }

    pub fn with_strategy(mut self, strategy: CombineStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_only(mut self, only: OnlyFilter) -> Self {
        self.only = only;
        self
    }

    /// Load from JSON such as `{"strategy": "sum", "only": "matched"}`
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
