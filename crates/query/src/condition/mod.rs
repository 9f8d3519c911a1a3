//! The condition capability the compiler builds on.
//!
//! The compiler never looks inside a condition. It starts from an empty
//! condition and only calls the combinators of [`Condition`], in source order.
//! Each call returns the updated value, so chains are left-associative:
//! `new().and(a).or(b).and(d)` reads `(a OR b) AND d`, whatever the usual
//! precedence of AND over OR would suggest.
//!
//! [`ConditionTree`] is the bundled implementation. Engine adapters can
//! translate it, or implement [`Condition`] directly for their own builder.

mod tree;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use tree::{Clause, ConditionTree, Connective, Term};

/// Operand handed to a condition combinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    /// Raw string value (equality and unknown operators).
    Text(String),
    /// Ordered list value (`__in`, `__between`).
    List(Vec<String>),
    /// Boolean value (`__isnull`).
    Bool(bool),
}

impl Operand {
    /// Creates a text operand.
    pub fn text(value: impl Into<String>) -> Self {
        Operand::Text(value.into())
    }

    /// Creates a list operand.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Operand::List(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Text(value) => write!(f, "{:?}", value),
            Operand::List(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", value)?;
                }
                write!(f, "]")
            }
            Operand::Bool(value) => write!(f, "{}", value),
        }
    }
}

/// A boolean predicate built by chaining combinators.
///
/// All methods take the condition by value and return the updated one.
/// `field` is the engine key including any operator suffix
/// (e.g. `age__in`, `profile__name`).
pub trait Condition: Sized {
    /// The empty condition, matching everything.
    fn new_condition() -> Self;

    /// Appends `AND field <op> value`.
    fn and(self, field: &str, value: Operand) -> Self;

    /// Appends `AND NOT field <op> value`.
    fn and_not(self, field: &str, value: Operand) -> Self;

    /// Appends `OR field <op> value`.
    fn or(self, field: &str, value: Operand) -> Self;

    /// Appends `OR NOT field <op> value`.
    fn or_not(self, field: &str, value: Operand) -> Self;

    /// Appends `AND (other)`.
    fn and_cond(self, other: Self) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_display() {
        assert_eq!(Operand::text("30").to_string(), "\"30\"");
        assert_eq!(Operand::list(["20", "30"]).to_string(), "[\"20\", \"30\"]");
        assert_eq!(Operand::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_operand_serializes_untagged() {
        assert_eq!(
            serde_json::to_value(Operand::list(["a", "b"])).unwrap(),
            serde_json::json!(["a", "b"])
        );
        assert_eq!(
            serde_json::to_value(Operand::Bool(true)).unwrap(),
            serde_json::json!(true)
        );
    }
}
