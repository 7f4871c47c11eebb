//! # Filter Tree
//!
//! The abstract syntax tree produced from a rule-builder payload.
//!
//! ## Architecture Overview
//!
//! - **[node]** - [`FilterNode`], [`Group`] and [`Rule`]
//! - **[operators]** - [`Condition`] (AND/OR), [`Operator`] and its [`Arity`]
//! - **[types]** - [`TypeTag`], the declared type of a rule's field
//!
//! ## Payload Shape
//!
//! ```text
//! {
//!   "condition": "AND",
//!   "rules": [
//!     { "field": "title", "type": "string", "operator": "equal", "value": "foo" },
//!     { "condition": "OR", "rules": [ ... ] }
//!   ],
//!   "valid": true
//! }
//! ```
//!
//! Groups nest to any depth. Leaves are rules; a rule's value is shaped by its
//! operator's arity when the tree is built, so the compiler never inspects raw
//! JSON.
//!
//! ## Example
//!
//! ```
//! use rulesql::ast::{FilterNode, Group, Operator, Rule, TypeTag};
//! use rulesql::{RuleValue, Scalar};
//!
//! let tree: FilterNode = Group::and(vec![
//!     Rule::new("title", TypeTag::String, Operator::Equal, RuleValue::Scalar(Scalar::from("foo"))).into(),
//!     Rule::new("title", TypeTag::String, Operator::IsNotNull, RuleValue::None).into(),
//! ])
//! .into();
//!
//! assert!(matches!(tree, FilterNode::Group(_)));
//! ```
pub mod node;
pub mod operators;
pub mod types;

pub use node::{FilterNode, Group, Rule};
pub use operators::{Arity, Condition, Operator};
pub use types::TypeTag;
