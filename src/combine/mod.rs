//! Rule set combination module
//!
//! Evaluates every rule of a set against one value and folds the results
//! into a single number according to a [`CombineStrategy`].

mod config;
mod filter;
pub mod fold;
mod rule_set;
mod strategy;

#[cfg(test)]
mod property_tests;

pub use config::CombineConfig;
pub use filter::OnlyFilter;
pub use fold::Tally;
pub use rule_set::RuleSet;
pub use strategy::CombineStrategy;
