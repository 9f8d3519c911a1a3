//! Condition compiler.

use tracing::{debug, trace};

use super::key::{Combinator, FilterTerm};
use crate::condition::Condition;
use crate::types::{FilterGroup, RequestDescriptor, SortSpec};

/// Compiles filter groups into one condition.
///
/// Each group is folded into its own condition by applying its terms in parse
/// order. The group conditions are then merged into an empty condition with
/// `and_cond`, in segment order. Segments are only ever AND-ed together.
///
/// Returns the empty condition when there are no groups.
pub fn compile<C: Condition>(groups: &[FilterGroup]) -> C {
    let mut terms = 0;
    let condition = groups.iter().fold(C::new_condition(), |condition, group| {
        terms += group.len();
        condition.and_cond(compile_group(group))
    });

    debug!(groups = groups.len(), terms, "Compiled filter expression");
    condition
}

/// Folds one group into a condition.
pub fn compile_group<C: Condition>(group: &FilterGroup) -> C {
    group
        .iter()
        .map(|(key, value)| FilterTerm::parse(key, value))
        .fold(C::new_condition(), |condition, term| {
            trace!(
                group = group.index,
                combinator = %term.combinator,
                field = %term.field,
                operand = %term.operand,
                "Applying filter term"
            );
            term.apply(condition)
        })
}

impl FilterTerm {
    /// Applies this term to an accumulator with the matching combinator.
    pub fn apply<C: Condition>(self, condition: C) -> C {
        match self.combinator {
            Combinator::And => condition.and(&self.field, self.operand),
            Combinator::AndNot => condition.and_not(&self.field, self.operand),
            Combinator::Or => condition.or(&self.field, self.operand),
            Combinator::OrNot => condition.or_not(&self.field, self.operand),
        }
    }
}

/// Everything the query engine needs to run a list request.
#[derive(Debug, Clone)]
pub struct CompiledQuery<C> {
    /// Projection list. Empty means all fields.
    pub fields: Vec<String>,
    /// Group-by fields.
    pub group_by: Vec<String>,
    /// Relations to load eagerly.
    pub join: Vec<String>,
    /// Pagination offset.
    pub offset: i64,
    /// Page size.
    pub limit: i64,
    /// Compiled filter.
    pub condition: C,
    /// Engine sort tokens.
    pub sort: SortSpec,
}

impl<C: Condition> CompiledQuery<C> {
    /// Compiles a request descriptor.
    ///
    /// # Example
    ///
    /// ```
    /// use apiql_query::compiler::CompiledQuery;
    /// use apiql_query::condition::ConditionTree;
    /// use apiql_query::types::{RawParams, RequestDescriptor};
    ///
    /// let params = RawParams::parse("query=age:30,Or.city:NYC&sortby=age,name&order=desc");
    /// let descriptor = RequestDescriptor::from_params(&params);
    /// let query: CompiledQuery<ConditionTree> = CompiledQuery::compile(&descriptor);
    ///
    /// assert_eq!(query.condition.to_string(), r#"(age = "30" OR city = "NYC")"#);
    /// assert_eq!(query.sort.as_slice(), ["-age", "-name"]);
    /// ```
    pub fn compile(descriptor: &RequestDescriptor) -> Self {
        Self {
            fields: descriptor.fields.clone(),
            group_by: descriptor.group_by.clone(),
            join: descriptor.join.clone(),
            offset: descriptor.offset,
            limit: descriptor.limit,
            condition: compile(&descriptor.filter_groups),
            sort: SortSpec::build(&descriptor.sort_by, &descriptor.order),
        }
    }
}

impl<C> CompiledQuery<C> {
    /// Relations to load eagerly, or `None` when nothing was requested.
    pub fn related(&self) -> Option<&[String]> {
        if self.join.is_empty() {
            None
        } else {
            Some(&self.join)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{ConditionTree, Operand};
    use crate::parser::parse_filter_groups;

    fn compile_str(query: &str) -> ConditionTree {
        compile(&parse_filter_groups(query))
    }

    #[test]
    fn test_no_groups_is_empty() {
        let condition: ConditionTree = compile(&[]);
        assert!(condition.is_empty());
    }

    #[test]
    fn test_single_equality() {
        let expected = ConditionTree::new_condition().and_cond(
            ConditionTree::new_condition().and("age", Operand::text("30")),
        );
        assert_eq!(compile_str("age:30"), expected);
    }

    #[test]
    fn test_group_chain_order() {
        let condition = compile_str("age:30,Or.city:NYC,Ex.status:banned");
        assert_eq!(
            condition.to_string(),
            r#"((age = "30" OR city = "NYC") AND NOT status = "banned")"#
        );
    }

    #[test]
    fn test_segments_are_anded() {
        let condition = compile_str("a:1|b:2,Or.b:3");
        assert_eq!(
            condition.to_string(),
            r#"(a = "1" AND (b = "2" OR b = "3"))"#
        );
    }

    #[test]
    fn test_in_and_null_operands() {
        let condition = compile_str("age__in:20.30.40,OrNot.deletedAt__null:true");
        assert_eq!(
            condition.to_string(),
            r#"(age__in = ["20", "30", "40"] OR NOT deletedAt__isnull = true)"#
        );
    }

    #[test]
    fn test_compiled_query_related() {
        let mut descriptor = RequestDescriptor::default();
        let query: CompiledQuery<ConditionTree> = CompiledQuery::compile(&descriptor);
        assert!(query.related().is_none());
        assert!(query.sort.is_empty());

        descriptor.join = vec!["profile".to_string()];
        let query: CompiledQuery<ConditionTree> = CompiledQuery::compile(&descriptor);
        assert_eq!(query.related().map(|r| r.len()), Some(1));
    }
}
