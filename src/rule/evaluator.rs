//! Rule evaluator

use crate::rule::ast::{CompiledRule, Condition, Operator, Outcome};

/// Evaluate a compiled rule against a value
pub fn check(rule: &CompiledRule, value: f64) -> Outcome {
    let matched = match (rule.operator, rule.condition) {
        (Operator::Less, Condition::Value(cv)) => value < cv,
        (Operator::Greater, Condition::Value(cv)) => value > cv,
        (Operator::Equal, Condition::Value(cv)) => value == cv,
        (Operator::NotEqual, Condition::Value(cv)) => value != cv,
        (Operator::Range, Condition::Range { low, high }) => value >= low && value <= high,

        // Unrecognized operators select neither branch
        _ => return Outcome::NONE,
    };

    Outcome {
        value: if matched {
            rule.when_true
        } else {
            rule.when_false
        },
        matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::parser::parse;

    fn eval(rule: &str, value: f64) -> Outcome {
        check(&parse(rule).unwrap(), value)
    }

    #[test]
    fn test_less() {
        assert_eq!(eval("<200?1:1.1", 10.0).value, 1.0);
        assert_eq!(eval("<200?1:1.1", 1000.0).value, 1.1);
        assert!(!eval("<200?1:1.1", 200.0).matched);
    }

    #[test]
    fn test_greater() {
        assert_eq!(eval(">200?3.5:2.0", 10.0).value, 2.0);
        assert_eq!(eval(">200?3.5:2.0", 1000.0).value, 3.5);
        assert!(!eval(">200?3.5:2.0", 200.0).matched);
    }

    #[test]
    fn test_equal() {
        assert_eq!(eval("=15?3:2.3", 15.0).value, 3.0);
        assert_eq!(eval("=15?3:2.3", 1000.0).value, 2.3);
    }

    #[test]
    fn test_equal_has_no_epsilon() {
        let outcome = eval("=0.3?1:0", 0.1 + 0.2);
        assert!(!outcome.matched);
        assert_eq!(outcome.value, 0.0);
    }

    #[test]
    fn test_not_equal() {
        let outcome = eval("!100?10:5", 15.0);
        assert!(outcome.matched);
        assert_eq!(outcome.value, 10.0);

        let outcome = eval("!100?10:5", 100.0);
        assert!(!outcome.matched);
        assert_eq!(outcome.value, 5.0);
    }

    #[test]
    fn test_range_is_inclusive() {
        assert_eq!(eval("@100-200?15:89", 100.0).value, 15.0);
        assert_eq!(eval("@100-200?15:89", 150.0).value, 15.0);
        assert_eq!(eval("@100-200?15:89", 200.0).value, 15.0);
        assert_eq!(eval("@100-200?15:89", 99.999).value, 89.0);
        assert_eq!(eval("@100-200?15:89", 200.001).value, 89.0);
        assert_eq!(eval("@100-200?15:89", 250.0).value, 89.0);
    }

    #[test]
    fn test_unrecognized_operator_is_silent() {
        let outcome = eval("#5?1:2", 5.0);
        assert_eq!(outcome, Outcome::NONE);

        let outcome = eval("%5?1:2", 100.0);
        assert_eq!(outcome.value, 0.0);
        assert!(!outcome.matched);
    }
}
