//! Ordered rule collections and the combine loop

use crate::combine::config::CombineConfig;
use crate::combine::fold::Tally;
use crate::error::Result;
use crate::rule::Rule;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Ordered rules, evaluated together against one value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parse a JSON array of rule strings, e.g. `["<200?1:1.1","@100-200?15:89"]`.
    ///
    /// Only the JSON shape is checked here; rule grammar errors surface when
    /// the set is combined.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule and fold the kept results into one number
    pub fn combine(&self, value: f64, config: CombineConfig) -> f64 {
        self.combine_with_rng(value, config, &mut rand::thread_rng())
    }

    /// Same as [`RuleSet::combine`] with an explicit source for the random strategy
    pub fn combine_with_rng<R: Rng>(&self, value: f64, config: CombineConfig, rng: &mut R) -> f64 {
        self.tally(value, config).fold(config.strategy, rng)
    }

    /// Evaluate every rule and collect the results the only-filter keeps.
    ///
    /// Rules that fail to parse are logged and skipped.
    pub fn tally(&self, value: f64, config: CombineConfig) -> Tally {
        let mut tally = Tally::new();

        for rule in &self.rules {
            let outcome = match rule.evaluate(value) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(rule = %rule, "error in scale rule lib: {}", e);
                    continue;
                }
            };

            if config.only.keeps(outcome.matched) {
                tally.push(outcome);
            }
        }

        tally
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
