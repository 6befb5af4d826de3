//! Property tests for the combine module

use proptest::prelude::*;

use crate::combine::{CombineConfig, CombineStrategy, OnlyFilter, RuleSet};
use crate::rule::Rule;

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Generate a well-formed rule string
fn rule_strategy() -> impl Strategy<Value = String> {
    let comparison = (
        prop_oneof![Just('='), Just('>'), Just('<'), Just('!')],
        -100i32..=100,
        -50i32..=50,
        -50i32..=50,
    )
        .prop_map(|(op, c, t, f)| format!("{}{}?{}:{}", op, c, t, f));

    let range = (0i32..=100, 0i32..=100, -50i32..=50, -50i32..=50).prop_map(|(a, b, t, f)| {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        format!("@{}-{}?{}:{}", low, high, t, f)
    });

    prop_oneof![3 => comparison, 1 => range]
}

fn rule_set_strategy() -> impl Strategy<Value = RuleSet> {
    prop::collection::vec(rule_strategy(), 0..=12)
        .prop_map(|rules| rules.into_iter().map(Rule::from).collect())
}

fn deterministic_strategy() -> impl Strategy<Value = CombineStrategy> {
    prop_oneof![
        Just(CombineStrategy::LastOne),
        Just(CombineStrategy::FirstOne),
        Just(CombineStrategy::Average),
        Just(CombineStrategy::Maximum),
        Just(CombineStrategy::Minimum),
        Just(CombineStrategy::Sum),
        Just(CombineStrategy::Intersections),
    ]
}

fn only_strategy() -> impl Strategy<Value = OnlyFilter> {
    prop_oneof![
        Just(OnlyFilter::All),
        Just(OnlyFilter::Matched),
        Just(OnlyFilter::Unmatched),
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// A singleton set combined with first-one or last-one equals the rule itself
    #[test]
    fn prop_singleton_matches_rule(rule in rule_strategy(), value in -150i32..=150) {
        let value = f64::from(value);
        let expected = Rule::from(rule.as_str()).evaluate(value).unwrap().value;

        let json = serde_json::to_string(&vec![rule]).unwrap();
        let set = RuleSet::from_json(&json).unwrap();

        prop_assert_eq!(set.combine(value, CombineConfig::new(CombineStrategy::FirstOne)), expected);
        prop_assert_eq!(set.combine(value, CombineConfig::new(CombineStrategy::LastOne)), expected);
    }

    /// Deterministic strategies give the same answer on repeated calls
    #[test]
    fn prop_deterministic_idempotent(
        set in rule_set_strategy(),
        strategy in deterministic_strategy(),
        only in only_strategy(),
        value in -150i32..=150,
    ) {
        let config = CombineConfig::new(strategy).with_only(only);
        let value = f64::from(value);
        let first = set.combine(value, config);
        let second = set.combine(value, config);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    /// Minimum and maximum bracket every kept result
    #[test]
    fn prop_bounds_bracket_results(set in rule_set_strategy(), value in -150i32..=150) {
        let value = f64::from(value);
        let config = CombineConfig::default();
        let min = set.combine(value, config.with_strategy(CombineStrategy::Minimum));
        let max = set.combine(value, config.with_strategy(CombineStrategy::Maximum));

        for rule in &set {
            let result = rule.evaluate(value).unwrap().value;
            prop_assert!(min <= result && result <= max);
        }
    }

    /// Matched and unmatched partitions add up to the unfiltered sum
    #[test]
    fn prop_filters_partition_sum(set in rule_set_strategy(), value in -150i32..=150) {
        let value = f64::from(value);
        let sum = CombineConfig::new(CombineStrategy::Sum);
        let all = set.combine(value, sum);
        let matched = set.combine(value, sum.with_only(OnlyFilter::Matched));
        let unmatched = set.combine(value, sum.with_only(OnlyFilter::Unmatched));
        prop_assert_eq!(all, matched + unmatched);
    }

    /// Random always returns one of the kept results
    #[test]
    fn prop_random_picks_member(set in rule_set_strategy(), value in -150i32..=150) {
        let value = f64::from(value);
        let picked = set.combine(value, CombineConfig::new(CombineStrategy::Random));
        let results: Vec<f64> = set
            .rules()
            .iter()
            .map(|rule| rule.evaluate(value).unwrap().value)
            .collect();

        if results.is_empty() {
            prop_assert_eq!(picked, 0.0);
        } else {
            prop_assert!(results.contains(&picked));
        }
    }
}
