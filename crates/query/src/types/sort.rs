//! Sort specification types and the `sortby`/`order` pairing rule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Ascending,
    /// Descending order.
    Descending,
}

/// A single sort field with direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub direction: SortDirection,
}

impl SortDirective {
    /// Parses an engine sort token (e.g., "-age" for descending).
    pub fn parse(s: &str) -> Self {
        if let Some(stripped) = s.strip_prefix('-') {
            Self {
                field: stripped.to_string(),
                direction: SortDirection::Descending,
            }
        } else {
            Self {
                field: s.to_string(),
                direction: SortDirection::Ascending,
            }
        }
    }
}

/// Ordered engine sort tokens: `field` ascending, `-field` descending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortSpec(Vec<String>);

impl SortSpec {
    /// Pairs sort fields with orders.
    ///
    /// - Same length: paired positionally.
    /// - Exactly one order: applied to every field.
    /// - Any other shape: no sorting at all.
    ///
    /// Only the literal `desc` selects descending order.
    ///
    /// # Example
    ///
    /// ```
    /// use apiql_query::types::SortSpec;
    ///
    /// let fields = vec!["age".to_string(), "name".to_string()];
    /// let spec = SortSpec::build(&fields, &["asc".to_string(), "desc".to_string()]);
    /// assert_eq!(spec.as_slice(), ["age", "-name"]);
    /// ```
    pub fn build(sort_by: &[String], order: &[String]) -> Self {
        if sort_by.is_empty() {
            return Self::default();
        }

        let tokens = if sort_by.len() == order.len() {
            sort_by
                .iter()
                .zip(order)
                .map(|(field, order)| sort_token(field, order))
                .collect()
        } else if order.len() == 1 {
            sort_by
                .iter()
                .map(|field| sort_token(field, &order[0]))
                .collect()
        } else {
            Vec::new()
        };

        Self(tokens)
    }

    /// Returns the tokens.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns true if nothing is sorted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses the tokens back into directives.
    pub fn directives(&self) -> Vec<SortDirective> {
        self.0.iter().map(|t| SortDirective::parse(t)).collect()
    }
}

fn sort_token(field: &str, order: &str) -> String {
    if order == "desc" {
        format!("-{}", field)
    } else {
        field.to_string()
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

impl IntoIterator for SortSpec {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
