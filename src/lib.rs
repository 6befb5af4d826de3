//! Scale Rules - embeddable scale factor lookup
//!
//! A rule such as `<200?1:1.1` picks one of two numbers depending on how an
//! input value compares with its condition. A [`RuleSet`] evaluates many
//! rules against the same value and folds the results with a
//! [`CombineStrategy`]:
//!
//! ```
//! use scale_rules::{CombineConfig, CombineStrategy, OnlyFilter, RuleSet};
//!
//! let rules = RuleSet::from_json(r#"["<200?1:1.1", "!100?10:5", "@100-200?15:89"]"#).unwrap();
//! let config = CombineConfig::new(CombineStrategy::Sum).with_only(OnlyFilter::Matched);
//! assert_eq!(rules.combine(10.0, config), 11.0);
//! ```
//!
//! Python bindings are available behind the `python` feature.

pub mod combine;
pub mod error;
pub mod rule;
pub mod scaler;

#[cfg(feature = "python")]
mod python;

pub use combine::{CombineConfig, CombineStrategy, OnlyFilter, RuleSet};
pub use error::{Result, ScaleRuleError, UnrecoverableIntersection};
pub use rule::{CompiledRule, Outcome, Rule};
pub use scaler::ScaleRules;
