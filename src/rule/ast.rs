//! Structured form of a single scale rule

/// Comparison operators, identified by the leading character of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Greater than (>)
    Greater,
    /// Less than (<)
    Less,
    /// Not equal (!)
    NotEqual,
    /// Inclusive range (@)
    Range,
    /// Any other non-word character. Parses, but never matches.
    Unrecognized(char),
}

impl Operator {
    pub fn from_char(c: char) -> Self {
        match c {
            '=' => Operator::Equal,
            '>' => Operator::Greater,
            '<' => Operator::Less,
            '!' => Operator::NotEqual,
            '@' => Operator::Range,
            other => Operator::Unrecognized(other),
        }
    }
}

/// Right-hand side of the comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    Value(f64),
    /// Both bounds inclusive
    Range { low: f64, high: f64 },
}

/// A parsed rule like `<200?1:1.1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompiledRule {
    pub operator: Operator,
    pub condition: Condition,
    pub when_true: f64,
    pub when_false: f64,
}

/// Result of checking one rule against a value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub value: f64,
    pub matched: bool,
}

impl Outcome {
    /// Outcome of a rule whose operator is not recognized
    pub const NONE: Outcome = Outcome {
        value: 0.0,
        matched: false,
    };
}
