//! Filter-expression compiler.
//!
//! - [`FilterTerm`] - Splits a filter key into combinator, engine key and operator
//! - [`compile`] - Folds filter groups into a [`Condition`](crate::condition::Condition)
//! - [`CompiledQuery`] - Descriptor plus compiled condition and sort, ready for an executor

mod compile;
mod key;

pub use compile::{CompiledQuery, compile, compile_group};
pub use key::{Combinator, FilterTerm, Operator};
