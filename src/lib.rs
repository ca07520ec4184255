pub mod ast;
pub mod builder;
pub mod config;
pub mod convert;
pub mod error;
pub mod lexer;
pub mod merge;
pub mod render;
pub mod results;
pub mod state;
pub mod value;

pub use ast::{Comparison, LogicOp, SortOrder};
pub use builder::QueryBuilder;
pub use config::{BuilderOptions, GroupPolicy, Spacing};
pub use error::{ConfigError, QueryError, StructureError};
pub use render::{RenderedQuery, render};
pub use results::ResultSet;
pub use state::QueryState;
pub use value::Value;

/// Start a query chain over `results`.
pub fn query<R: ResultSet>(results: R) -> QueryBuilder<R> {
    QueryBuilder::new(results)
}
