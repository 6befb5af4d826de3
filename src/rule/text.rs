//! Rule text as supplied by callers

use crate::error::Result;
use crate::rule::ast::{CompiledRule, Outcome};
use crate::rule::cache;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One rule exactly as written, e.g. `@100-200?15:89`.
///
/// Parsing is deferred until the rule is evaluated, so a rule set can hold
/// rules that later turn out to be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rule(String);

impl Rule {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse (or fetch from cache) the structured form
    pub fn compile(&self) -> Result<CompiledRule> {
        cache::get_or_parse(&self.0)
    }

    /// Evaluate against a value: selected branch plus matched flag
    pub fn evaluate(&self, value: f64) -> Result<Outcome> {
        cache::evaluate(&self.0, value)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Rule {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Rule {
    fn from(text: String) -> Self {
        Self(text)
    }
}
