pub mod ast;
pub mod cli;
pub mod compiler;
pub mod dialect;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod value;
pub mod where_clause;

pub use ast::{Arity, Condition, FilterNode, Group, Operator, Rule, TypeTag};
pub use compiler::{CompileOptions, Compiler, TypeFallback, compile, compile_json};
pub use dialect::{Dialect, ValueEscaping};
pub use error::{Error, Result};
pub use parser::{parse_filter, parse_value};
pub use value::{RuleValue, Scalar};
pub use where_clause::WhereClause;
