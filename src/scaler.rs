//! Scale rule facade
//!
//! [`ScaleRules`] bundles a rule set with the configuration used to combine
//! it, for callers that want a single object to configure once and query.

use crate::combine::{CombineConfig, CombineStrategy, OnlyFilter, RuleSet};
use crate::error::Result;

/// A rule set plus the strategy and filter applied to it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleRules {
    rules: RuleSet,
    config: CombineConfig,
}

impl ScaleRules {
    /// Empty rule set, `last-one` strategy, no filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON array of rule strings
    pub fn from_json(rules: &str) -> Result<Self> {
        Ok(Self {
            rules: Self::parse(rules)?,
            config: CombineConfig::default(),
        })
    }

    /// Parse a JSON array of rule strings into a [`RuleSet`]
    pub fn parse(rules: &str) -> Result<RuleSet> {
        RuleSet::from_json(rules)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn config(&self) -> CombineConfig {
        self.config
    }

    pub fn set_rules(&mut self, rules: RuleSet) {
        self.rules = rules;
    }

    pub fn set_config(&mut self, config: CombineConfig) {
        self.config = config;
    }

    pub fn set_combine_strategy(&mut self, strategy: CombineStrategy) {
        self.config.strategy = strategy;
    }

    pub fn set_only_filter(&mut self, only: OnlyFilter) {
        self.config.only = only;
    }

    /// `true` keeps only matched results, `false` only unmatched ones
    pub fn set_use_only(&mut self, only_matched: bool) {
        self.config.only = OnlyFilter::from(only_matched);
    }

    pub fn evaluate_as_float(&self, value: f64) -> f64 {
        self.rules.combine(value, self.config)
    }

    /// Integer variant; the combined result is truncated toward zero
    pub fn evaluate_as_int(&self, value: i64) -> i64 {
        self.evaluate_as_float(value as f64) as i64
    }
}
