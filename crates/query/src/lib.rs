//! # apiql-query - Query-String Filter Compiler
//!
//! This crate turns the query parameters of a list request into a structured
//! request descriptor and compiles its filter expression into a condition
//! that a query engine can run.
//!
//! # Query-String Grammar
//!
//! | Parameter | Format | Effect |
//! |-----------|--------|--------|
//! | `fields` | `a,b,c` | Projection list |
//! | `groupby` | `a,b` | Group-by fields |
//! | `sortby` | `a,b` | Sort fields (dots become `__`) |
//! | `order` | `asc,desc` | Paired with `sortby`, or one value for all |
//! | `offset` | integer | Pagination offset, default 0 |
//! | `limit` | integer | Page size, default 10 |
//! | `join` | `a,b` | Relations to load (dots become `__`) |
//! | `query` | `k1:v1,k2:v2\|k3:v3` | Filter expression |
//!
//! ## Filter Keys
//!
//! A key may carry a combinator prefix and an operator suffix:
//!
//! | Prefix | Combinator | | Suffix | Operand |
//! |--------|------------|-|--------|---------|
//! | none, `And.` | AND | | none | raw string |
//! | `Ex.` | AND NOT | | `__in`, `__between` | value split on `.` |
//! | `Or.` | OR | | `__null` | `__isnull` = true |
//! | `OrNot.` | OR NOT | | `__notnull` | `__isnull` = false |
//!
//! Terms of a `,` group are chained left to right; `|` groups are AND-ed.
//!
//! # Quick Start
//!
//! ```
//! use apiql_query::compiler::CompiledQuery;
//! use apiql_query::condition::ConditionTree;
//! use apiql_query::types::{RawParams, RequestDescriptor};
//!
//! let params = RawParams::parse("query=status:active|age__in:20.30,Or.vip&limit=5");
//! let descriptor = RequestDescriptor::from_params(&params);
//! let query: CompiledQuery<ConditionTree> = CompiledQuery::compile(&descriptor);
//!
//! assert_eq!(query.limit, 5);
//! assert_eq!(
//!     query.condition.to_string(),
//!     r#"(status = "active" AND (age__in = ["20", "30"] OR vip = "true"))"#
//! );
//! ```
//!
//! # Architecture
//!
//! - [`types`] - Raw parameters, request descriptor, sort specification
//! - [`parser`] - Query-string tokenizer and descriptor builder
//! - [`compiler`] - Key normalizer and condition compiler
//! - [`condition`] - The condition capability and the bundled [`ConditionTree`](condition::ConditionTree)
//! - [`case`] - snake_case / CamelCase identifier conversion
//! - [`core`] - The [`QueryExecutor`](core::QueryExecutor) collaborator trait
//! - [`error`] - Execution errors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod case;
pub mod compiler;
pub mod condition;
pub mod core;
pub mod error;
pub mod parser;
pub mod types;

pub use compiler::{CompiledQuery, compile};
pub use condition::{Condition, ConditionTree, Operand};
pub use crate::core::{QueryExecutor, QueryPage};
pub use error::{QueryError, QueryResult};
pub use types::{FilterGroup, RawParams, RequestDescriptor, SortSpec};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
