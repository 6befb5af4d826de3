//! Rule string parser
//!
//! Grammar: `<operator><condition>?<when_true>:<when_false>`, where the
//! operator is a single non-word character.

use crate::error::{Result, ScaleRuleError};
use crate::rule::ast::{CompiledRule, Condition, Operator};

/// Parse a rule string into a [`CompiledRule`]
pub fn parse(rule: &str) -> Result<CompiledRule> {
    let parts = split(rule).ok_or_else(|| ScaleRuleError::MalformedRule(rule.to_string()))?;
    let operator = Operator::from_char(parts.operator);

    let value = if operator == Operator::Range {
        None
    } else {
        Some(parse_number(parts.condition)?)
    };

    let when_true = parse_number(parts.when_true)?;
    let when_false = parse_number(parts.when_false)?;

    let condition = match value {
        Some(v) => Condition::Value(v),
        None => parse_range(parts.condition)?,
    };

    Ok(CompiledRule {
        operator,
        condition,
        when_true,
        when_false,
    })
}

#[derive(Debug, PartialEq)]
struct Parts<'a> {
    operator: char,
    condition: &'a str,
    when_true: &'a str,
    when_false: &'a str,
}

/// Break a rule into its four raw pieces.
///
/// The branch separator is the last `:` and the condition separator is the
/// last `?` in front of it.
fn split(rule: &str) -> Option<Parts<'_>> {
    let mut chars = rule.chars();
    let operator = chars.next()?;
    if operator.is_ascii_alphanumeric() || operator == '_' {
        return None;
    }

    // Any non-word character may be the operator, a line break included
    let rest = chars.as_str();
    if rest.contains('\n') {
        return None;
    }

    let colon = rest.rfind(':')?;
    let question = rest[..colon].rfind('?')?;

    Some(Parts {
        operator,
        condition: &rest[..question],
        when_true: &rest[question + 1..colon],
        when_false: &rest[colon + 1..],
    })
}

fn parse_number(literal: &str) -> Result<f64> {
    parse_float(literal).map_err(|reason| ScaleRuleError::invalid_number(literal, reason))
}

/// Parse a float literal, rejecting finite literals too large for `f64`.
///
/// Spelled-out infinities (`inf`, `-Infinity`) are still accepted.
fn parse_float(literal: &str) -> std::result::Result<f64, String> {
    let value = literal.parse::<f64>().map_err(|e| e.to_string())?;
    if value.is_infinite() && !names_infinity(literal) {
        return Err("value out of range".to_string());
    }
    Ok(value)
}

fn names_infinity(literal: &str) -> bool {
    let digits = literal.trim_start_matches(['+', '-']);
    digits.eq_ignore_ascii_case("inf") || digits.eq_ignore_ascii_case("infinity")
}

fn parse_range(text: &str) -> Result<Condition> {
    let mut bounds = text.split('-');
    let (low, high) = match (bounds.next(), bounds.next(), bounds.next()) {
        (Some(low), Some(high), None) => (low, high),
        _ => return Err(ScaleRuleError::InvalidRange(text.to_string())),
    };

    let low = parse_float(low).map_err(|_| ScaleRuleError::InvalidRange(text.to_string()))?;
    let high = parse_float(high).map_err(|_| ScaleRuleError::InvalidRange(text.to_string()))?;

    Ok(Condition::Range { low, high })
}
