use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Logical connective of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    /// All children must hold (`AND`)
    And,
    /// Any child may hold (`OR`)
    Or,
}

impl Condition {
    /// SQL keyword used to join the group's children
    pub fn keyword(self) -> &'static str {
        match self {
            Condition::And => "AND",
            Condition::Or => "OR",
        }
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Ok(Condition::And),
            "OR" => Ok(Condition::Or),
            _ => Err(format!("unknown condition '{}'", s)),
        }
    }
}

/// Shape of the value an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    /// No value (`is_null`, `is_empty`, ...)
    None,
    /// One scalar
    Scalar,
    /// Any number of scalars, at least one
    List,
    /// Exactly two scalars (`between`, `not_between`)
    Pair,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Arity::None => "no value",
            Arity::Scalar => "a single value",
            Arity::List => "a list of values",
            Arity::Pair => "a pair of values",
        };
        f.write_str(text)
    }
}

/// Comparison operators emitted by the rule builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    // Equality
    /// `=`
    Equal,
    /// `<>`
    NotEqual,

    // Membership
    /// `IN (...)`
    In,
    /// One `!=` clause per element, joined with `||`
    NotIn,

    // Pattern matching
    /// `LIKE 'v%'`
    BeginsWith,
    /// `NOT LIKE 'v%'`
    NotBeginsWith,
    /// `LIKE '%v%'`
    Contains,
    /// `NOT LIKE '%v%'`
    NotContains,
    /// `LIKE '%v'`
    EndsWith,
    /// `NOT LIKE '%v'`
    NotEndsWith,

    // Emptiness
    /// Empty string or NULL
    IsEmpty,
    /// Neither empty string nor NULL
    IsNotEmpty,
    /// `IS NULL`
    IsNull,
    /// `IS NOT NULL`
    IsNotNull,

    // Ordering
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,

    // Ranges
    /// Strictly between two bounds
    Between,
    /// Below the first bound and above the second
    NotBetween,
}

impl Operator {
    /// Every operator, in the order the rule builder lists them.
    pub const ALL: [Operator; 20] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::In,
        Operator::NotIn,
        Operator::BeginsWith,
        Operator::NotBeginsWith,
        Operator::Contains,
        Operator::NotContains,
        Operator::EndsWith,
        Operator::NotEndsWith,
        Operator::IsEmpty,
        Operator::IsNotEmpty,
        Operator::IsNull,
        Operator::IsNotNull,
        Operator::Less,
        Operator::LessOrEqual,
        Operator::Greater,
        Operator::GreaterOrEqual,
        Operator::Between,
        Operator::NotBetween,
    ];

    /// The tag used in filter JSON
    pub fn tag(self) -> &'static str {
        match self {
            Operator::Equal => "equal",
            Operator::NotEqual => "not_equal",
            Operator::In => "in",
            Operator::NotIn => "not_in",
            Operator::BeginsWith => "begins_with",
            Operator::NotBeginsWith => "not_begins_with",
            Operator::Contains => "contains",
            Operator::NotContains => "not_contains",
            Operator::EndsWith => "ends_with",
            Operator::NotEndsWith => "not_ends_with",
            Operator::IsEmpty => "is_empty",
            Operator::IsNotEmpty => "is_not_empty",
            Operator::IsNull => "is_null",
            Operator::IsNotNull => "is_not_null",
            Operator::Less => "less",
            Operator::LessOrEqual => "less_or_equal",
            Operator::Greater => "greater",
            Operator::GreaterOrEqual => "greater_or_equal",
            Operator::Between => "between",
            Operator::NotBetween => "not_between",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operator::IsEmpty | Operator::IsNotEmpty | Operator::IsNull | Operator::IsNotNull => {
                Arity::None
            }
            Operator::In | Operator::NotIn => Arity::List,
            Operator::Between | Operator::NotBetween => Arity::Pair,
            _ => Arity::Scalar,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.tag() == s)
            .ok_or_else(|| Error::UnsupportedOperator {
                operator: s.to_string(),
            })
    }
}
