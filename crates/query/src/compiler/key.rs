//! Field-key normalizer.
//!
//! A filter key carries up to three things: a combinator prefix, a dotted
//! field path and an operator suffix. For example `Or.profile.age__in`
//! normalizes to combinator OR, engine key `profile__age__in`, operator IN.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::condition::Operand;
use crate::parser::nest_path;

/// How a term joins the group's accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combinator {
    /// `And.` prefix, or no prefix.
    And,
    /// `Ex.` prefix.
    AndNot,
    /// `Or.` prefix.
    Or,
    /// `OrNot.` prefix.
    OrNot,
}

impl Combinator {
    /// Prefixes in matching priority order.
    const PREFIXES: [(&'static str, Combinator); 4] = [
        ("And.", Combinator::And),
        ("Ex.", Combinator::AndNot),
        ("Or.", Combinator::Or),
        ("OrNot.", Combinator::OrNot),
    ];

    /// Splits the combinator prefix off a raw key.
    ///
    /// Keys without a known prefix default to AND and are returned whole.
    pub fn split(key: &str) -> (Combinator, &str) {
        Self::PREFIXES
            .iter()
            .find_map(|(prefix, combinator)| {
                key.strip_prefix(prefix).map(|rest| (*combinator, rest))
            })
            .unwrap_or((Combinator::And, key))
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::And => write!(f, "AND"),
            Combinator::AndNot => write!(f, "AND NOT"),
            Combinator::Or => write!(f, "OR"),
            Combinator::OrNot => write!(f, "OR NOT"),
        }
    }
}

/// Comparison selected by the key suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// No recognised suffix. Anything the engine itself understands
    /// (`__gt`, `__icontains`, ...) passes through with the raw value.
    Equal,
    /// `__in`
    In,
    /// `__between`
    Between,
    /// `__null`, sent as `__isnull` with `true`.
    IsNull,
    /// `__notnull`, sent as `__isnull` with `false`.
    NotNull,
}

const IN_SUFFIX: &str = "__in";
const BETWEEN_SUFFIX: &str = "__between";
const NULL_SUFFIX: &str = "__null";
const NOT_NULL_SUFFIX: &str = "__notnull";
const IS_NULL_SUFFIX: &str = "__isnull";

impl Operator {
    /// Detects the operator of an already nested key.
    pub fn detect(key: &str) -> Operator {
        if key.ends_with(IN_SUFFIX) {
            Operator::In
        } else if key.ends_with(BETWEEN_SUFFIX) {
            Operator::Between
        } else if key.ends_with(NULL_SUFFIX) {
            Operator::IsNull
        } else if key.ends_with(NOT_NULL_SUFFIX) {
            Operator::NotNull
        } else {
            Operator::Equal
        }
    }

    /// Rewrites the key suffix into what the engine expects.
    fn engine_key(self, key: &str) -> String {
        match self {
            Operator::IsNull => rewrite_suffix(key, NULL_SUFFIX, IS_NULL_SUFFIX),
            Operator::NotNull => rewrite_suffix(key, NOT_NULL_SUFFIX, IS_NULL_SUFFIX),
            _ => key.to_string(),
        }
    }

    /// Coerces the raw value into the operand this operator takes.
    ///
    /// List operators split on `.`; null checks ignore the value.
    pub fn operand(self, value: &str) -> Operand {
        match self {
            Operator::In | Operator::Between => Operand::list(value.split('.')),
            Operator::IsNull => Operand::Bool(true),
            Operator::NotNull => Operand::Bool(false),
            Operator::Equal => Operand::text(value),
        }
    }
}

fn rewrite_suffix(key: &str, from: &str, to: &str) -> String {
    let stem = key.strip_suffix(from).unwrap_or(key);
    format!("{}{}", stem, to)
}

/// A normalized filter key with its coerced operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTerm {
    /// How the term joins the accumulator.
    pub combinator: Combinator,
    /// Detected operator.
    pub operator: Operator,
    /// Key handed to the engine: nested path plus operator suffix.
    pub field: String,
    /// Operand handed to the engine.
    pub operand: Operand,
}

impl FilterTerm {
    /// Normalizes one `(key, value)` pair of a filter group.
    ///
    /// # Example
    ///
    /// ```
    /// use apiql_query::compiler::{Combinator, FilterTerm, Operator};
    /// use apiql_query::condition::Operand;
    ///
    /// let term = FilterTerm::parse("Ex.profile.deleted_at__null", "whatever");
    /// assert_eq!(term.combinator, Combinator::AndNot);
    /// assert_eq!(term.operator, Operator::IsNull);
    /// assert_eq!(term.field, "profile__deleted_at__isnull");
    /// assert_eq!(term.operand, Operand::Bool(true));
    /// ```
    pub fn parse(key: &str, value: &str) -> Self {
        let (combinator, rest) = Combinator::split(key);
        let nested = nest_path(rest);
        let operator = Operator::detect(&nested);

        Self {
            combinator,
            operator,
            field: operator.engine_key(&nested),
            operand: operator.operand(value),
        }
    }

    /// Returns the nested field path without the operator suffix.
    pub fn path(&self) -> &str {
        let suffix = match self.operator {
            Operator::In => IN_SUFFIX,
            Operator::Between => BETWEEN_SUFFIX,
            Operator::IsNull | Operator::NotNull => IS_NULL_SUFFIX,
            Operator::Equal => return &self.field,
        };
        self.field.strip_suffix(suffix).unwrap_or(&self.field)
    }
}
