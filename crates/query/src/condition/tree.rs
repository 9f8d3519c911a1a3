//! Value-typed condition tree.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Condition, Operand};

/// How a clause joins the clauses before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connective {
    /// Logical AND.
    And,
    /// Logical OR.
    Or,
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connective::And => write!(f, "AND"),
            Connective::Or => write!(f, "OR"),
        }
    }
}

/// The subject of a clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    /// A single field predicate.
    Predicate {
        /// Engine key, operator suffix included.
        field: String,
        /// Operand.
        value: Operand,
    },
    /// A nested condition merged with [`Condition::and_cond`].
    Group(ConditionTree),
}

/// One link of the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// Connective to everything before this clause. Ignored on the first clause.
    pub connective: Connective,
    /// Whether the term is negated.
    pub negated: bool,
    /// The term.
    pub term: Term,
}

/// An immutable chain of clauses, evaluated strictly left to right.
///
/// # Example
///
/// ```
/// use apiql_query::condition::{Condition, ConditionTree, Operand};
///
/// let cond = ConditionTree::new_condition()
///     .and("age", Operand::text("30"))
///     .or("city", Operand::text("NYC"))
///     .and_not("status", Operand::text("banned"));
///
/// assert_eq!(
///     cond.to_string(),
///     r#"((age = "30" OR city = "NYC") AND NOT status = "banned")"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionTree {
    clauses: Vec<Clause>,
}

impl ConditionTree {
    /// Returns the clauses in chain order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns true for the empty (always true) condition.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Number of clauses at this level.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    fn push(mut self, connective: Connective, negated: bool, term: Term) -> Self {
        self.clauses.push(Clause {
            connective,
            negated,
            term,
        });
        self
    }

    fn predicate(field: &str, value: Operand) -> Term {
        Term::Predicate {
            field: field.to_string(),
            value,
        }
    }
}

impl Condition for ConditionTree {
    fn new_condition() -> Self {
        Self::default()
    }

    fn and(self, field: &str, value: Operand) -> Self {
        self.push(Connective::And, false, Self::predicate(field, value))
    }

    fn and_not(self, field: &str, value: Operand) -> Self {
        self.push(Connective::And, true, Self::predicate(field, value))
    }

    fn or(self, field: &str, value: Operand) -> Self {
        self.push(Connective::Or, false, Self::predicate(field, value))
    }

    fn or_not(self, field: &str, value: Operand) -> Self {
        self.push(Connective::Or, true, Self::predicate(field, value))
    }

    fn and_cond(self, other: Self) -> Self {
        if other.is_empty() {
            return self;
        }
        self.push(Connective::And, false, Term::Group(other))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "NOT ")?;
        }
        match &self.term {
            Term::Predicate { field, value } => write!(f, "{} = {}", field, value),
            Term::Group(tree) => write!(f, "{}", tree),
        }
    }
}

impl fmt::Display for ConditionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.clauses.split_first() else {
            return write!(f, "TRUE");
        };

        let mut rendered = first.to_string();
        for clause in rest {
            rendered = format!("({} {} {})", rendered, clause.connective, clause);
        }
        write!(f, "{}", rendered)
    }
}
