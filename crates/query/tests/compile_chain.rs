//! Integration tests for the query-string to condition pipeline.
//!
//! A recording condition logs every combinator call so the tests can assert on
//! the literal chain the compiler produces, not on a boolean equivalent.

use apiql_query::compiler::CompiledQuery;
use apiql_query::condition::{Condition, Operand};
use apiql_query::types::{RawParams, RequestDescriptor};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    And(String, Operand),
    AndNot(String, Operand),
    Or(String, Operand),
    OrNot(String, Operand),
    AndCond(Vec<Call>),
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Recorder(Vec<Call>);

impl Recorder {
    fn record(mut self, call: Call) -> Self {
        self.0.push(call);
        self
    }
}

impl Condition for Recorder {
    fn new_condition() -> Self {
        Self::default()
    }

    fn and(self, field: &str, value: Operand) -> Self {
        self.record(Call::And(field.to_string(), value))
    }

    fn and_not(self, field: &str, value: Operand) -> Self {
        self.record(Call::AndNot(field.to_string(), value))
    }

    fn or(self, field: &str, value: Operand) -> Self {
        self.record(Call::Or(field.to_string(), value))
    }

    fn or_not(self, field: &str, value: Operand) -> Self {
        self.record(Call::OrNot(field.to_string(), value))
    }

    fn and_cond(self, other: Self) -> Self {
        self.record(Call::AndCond(other.0))
    }
}

fn compile(query: &str) -> CompiledQuery<Recorder> {
    let descriptor = RequestDescriptor::from_params(&RawParams::parse(query));
    CompiledQuery::compile(&descriptor)
}

fn calls(query: &str) -> Vec<Call> {
    compile(query).condition.0
}

fn text(field: &str, value: &str) -> (String, Operand) {
    (field.to_string(), Operand::text(value))
}

#[test]
fn test_single_equality() {
    let (field, value) = text("age", "30");
    assert_eq!(
        calls("query=age:30"),
        vec![Call::AndCond(vec![Call::And(field, value)])]
    );
}

#[test]
fn test_or_chain_keeps_source_order() {
    let (age, thirty) = text("age", "30");
    let (city, nyc) = text("city", "NYC");
    assert_eq!(
        calls("query=age:30,Or.city:NYC"),
        vec![Call::AndCond(vec![
            Call::And(age, thirty),
            Call::Or(city, nyc),
        ])]
    );
}

#[test]
fn test_every_combinator() {
    let group = match calls("query=z:1,Or.a:2,Ex.m:3,OrNot.b:4,And.c:5").remove(0) {
        Call::AndCond(group) => group,
        other => panic!("expected AndCond, got {:?}", other),
    };

    assert_eq!(
        group,
        vec![
            Call::And("z".to_string(), Operand::text("1")),
            Call::Or("a".to_string(), Operand::text("2")),
            Call::AndNot("m".to_string(), Operand::text("3")),
            Call::OrNot("b".to_string(), Operand::text("4")),
            Call::And("c".to_string(), Operand::text("5")),
        ]
    );
}

#[test]
fn test_one_and_cond_per_segment() {
    let calls = calls("query=a:1|b:2,c:3|d:4|e");
    assert_eq!(calls.len(), 4);

    let merged: usize = calls
        .iter()
        .map(|call| match call {
            Call::AndCond(group) => group.len(),
            other => panic!("expected AndCond, got {:?}", other),
        })
        .sum();
    assert_eq!(merged, 5);
}

#[test]
fn test_in_operand_is_ordered_list() {
    assert_eq!(
        calls("query=age__in:20.30.40"),
        vec![Call::AndCond(vec![Call::And(
            "age__in".to_string(),
            Operand::list(["20", "30", "40"]),
        )])]
    );
}

#[test]
fn test_null_ignores_value() {
    assert_eq!(
        calls("query=deletedAt__null:false"),
        vec![Call::AndCond(vec![Call::And(
            "deletedAt__isnull".to_string(),
            Operand::Bool(true),
        )])]
    );
}

#[test]
fn test_nested_path_with_prefix() {
    assert_eq!(
        calls("query=Ex.profile.country.code:US"),
        vec![Call::AndCond(vec![Call::AndNot(
            "profile__country__code".to_string(),
            Operand::text("US"),
        )])]
    );
}

#[test]
fn test_time_literal_value() {
    assert_eq!(
        calls("query=opens_at__gte:08:30:00"),
        vec![Call::AndCond(vec![Call::And(
            "opens_at__gte".to_string(),
            Operand::text("08:30:00"),
        )])]
    );
}

#[test]
fn test_no_query_is_empty_condition() {
    assert_eq!(calls("limit=5"), Vec::new());
}

#[test]
fn test_descriptor_fields_flow_through() {
    let query = compile("fields=id,name&groupby=city&join=profile.address&offset=20&limit=abc");
    assert_eq!(query.fields, vec!["id", "name"]);
    assert_eq!(query.group_by, vec!["city"]);
    assert_eq!(query.related(), Some(&["profile__address".to_string()][..]));
    assert_eq!(query.offset, 20);
    assert_eq!(query.limit, 0);
}

#[test]
fn test_sort_single_order() {
    let query = compile("sortby=age,name&order=desc");
    assert_eq!(query.sort.as_slice(), ["-age", "-name"]);
}

#[test]
fn test_sort_positional_order() {
    let query = compile("sortby=age,profile.name&order=asc,desc");
    assert_eq!(query.sort.as_slice(), ["age", "-profile__name"]);
}

#[test]
fn test_sort_mismatch_is_ignored() {
    let query = compile("sortby=a,b,c&order=asc,desc");
    assert!(query.sort.is_empty());
}
