use serde_json::Value as Json;
use tracing::{debug, trace};

use crate::{
    ast::{FilterNode, Group, Operator, Rule, TypeTag},
    dialect::{Dialect, ValueEscaping},
    error::{Error, Result},
    normalize::normalize,
    parser::parse_value,
    value::{RuleValue, Scalar},
};

const ROOT_PATH: &str = "filter";

/// What to do with a rule whose declared type is not one of the known tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFallback {
    /// Render values as plain text
    #[default]
    PassThrough,
    /// Fail with [`Error::UnsupportedType`]
    Reject,
}

/// Settings for a [`Compiler`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub dialect: Dialect,
    pub escaping: ValueEscaping,
    pub unknown_types: TypeFallback,
}

impl CompileOptions {
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn escaping(mut self, escaping: ValueEscaping) -> Self {
        self.escaping = escaping;
        self
    }

    pub fn unknown_types(mut self, fallback: TypeFallback) -> Self {
        self.unknown_types = fallback;
        self
    }
}

/// Compiles filter trees into SQL predicates.
///
/// Every rule references the caller's target column; a rule's own `field` is
/// not used. Groups render as `" ( " + children joined by " AND "/" OR " + " ) "`
/// and rules inside a group render bare, so the output composes without
/// flattening. The result is meant to be ANDed onto an existing WHERE clause.
///
/// The compiler holds no state besides its options and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompileOptions) -> Self {
        Compiler { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compiles a filter tree against the `target` column.
    ///
    /// A bare rule at the top level is wrapped like a group with one child.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulesql::ast::{FilterNode, Group, Operator, Rule, TypeTag};
    /// use rulesql::{Compiler, RuleValue, Scalar};
    ///
    /// let tree: FilterNode = Group::and(vec![Rule::new(
    ///     "title",
    ///     TypeTag::String,
    ///     Operator::Equal,
    ///     RuleValue::Scalar(Scalar::from("foo")),
    /// )
    /// .into()])
    /// .into();
    ///
    /// let sql = Compiler::new().compile(&tree, "title").unwrap();
    /// assert_eq!(sql, " ( `title` = 'foo' ) ");
    /// ```
    pub fn compile(&self, node: &FilterNode, target: &str) -> Result<String> {
        debug!(target_field = target, dialect = %self.options.dialect, "compiling filter");

        let column = self.options.dialect.quote_identifier(target);
        let sql = match node {
            FilterNode::Group(group) => self.compile_group(group, &column, ROOT_PATH)?,
            FilterNode::Rule(rule) => wrap(&self.compile_rule(rule, &column)?),
        };

        debug!(target_field = target, len = sql.len(), "compiled filter");
        Ok(sql)
    }

    /// Decodes and compiles filter JSON.
    ///
    /// Returns `Ok(None)` when there is nothing to filter on: blank text,
    /// `null`, or a root group without rules.
    pub fn compile_json(&self, text: &str, target: &str) -> Result<Option<String>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let json: Json = serde_json::from_str(text)?;
        if is_empty_filter(&json) {
            debug!(target_field = target, "empty filter, nothing to compile");
            return Ok(None);
        }

        let tree = parse_value(&json)?;
        self.compile(&tree, target).map(Some)
    }

    fn compile_group(&self, group: &Group, column: &str, path: &str) -> Result<String> {
        if group.children.is_empty() {
            return Err(Error::EmptyGroup {
                path: path.to_string(),
            });
        }

        let parts = group
            .children
            .iter()
            .enumerate()
            .map(|(i, child)| match child {
                FilterNode::Group(inner) => {
                    self.compile_group(inner, column, &format!("{path}.rules[{i}]"))
                }
                FilterNode::Rule(rule) => self.compile_rule(rule, column),
            })
            .collect::<Result<Vec<_>>>()?;

        let separator = format!(" {} ", group.condition.keyword());
        Ok(wrap(&parts.join(&separator)))
    }

    fn compile_rule(&self, rule: &Rule, column: &str) -> Result<String> {
        if !rule.type_tag.is_known() && self.options.unknown_types == TypeFallback::Reject {
            return Err(Error::UnsupportedType {
                type_tag: rule.type_tag.to_string(),
            });
        }
        trace!(operator = %rule.operator, field = %rule.field, type_tag = %rule.type_tag, "compiling rule");

        let sql = match rule.operator {
            Operator::Equal => format!("{column} = '{}'", self.scalar_text(rule)?),
            Operator::NotEqual => format!("{column} <> '{}'", self.scalar_text(rule)?),

            Operator::In => {
                let items = self
                    .list_texts(rule)?
                    .iter()
                    .map(|text| format!("'{text}'"))
                    .collect::<Vec<_>>();
                format!("{column} IN ({})", items.join(","))
            }
            Operator::NotIn => self
                .list_texts(rule)?
                .iter()
                .map(|text| format!("{column} != '{text}'"))
                .collect::<Vec<_>>()
                .join(" || "),

            Operator::BeginsWith => format!("{column} LIKE '{}%'", self.scalar_text(rule)?),
            Operator::NotBeginsWith => format!("{column} NOT LIKE '{}%'", self.scalar_text(rule)?),
            Operator::Contains => format!("{column} LIKE '%{}%'", self.scalar_text(rule)?),
            Operator::NotContains => format!("{column} NOT LIKE '%{}%'", self.scalar_text(rule)?),
            Operator::EndsWith => format!("{column} LIKE '%{}'", self.scalar_text(rule)?),
            Operator::NotEndsWith => format!("{column} NOT LIKE '%{}'", self.scalar_text(rule)?),

            Operator::IsEmpty => format!("({column} = '') OR ({column} IS NULL)"),
            Operator::IsNotEmpty => format!("({column} <> '') AND ({column} IS NOT NULL)"),
            Operator::IsNull => format!("{column} IS NULL"),
            Operator::IsNotNull => format!("{column} IS NOT NULL"),

            Operator::Less => format!("{column} < '{}'", self.scalar_text(rule)?),
            Operator::LessOrEqual => format!("{column} <= '{}'", self.scalar_text(rule)?),
            Operator::Greater => format!("{column} > '{}'", self.scalar_text(rule)?),
            Operator::GreaterOrEqual => format!("{column} >= '{}'", self.scalar_text(rule)?),

            Operator::Between => {
                let (low, high) = self.pair_texts(rule)?;
                format!("({column} > '{low}') AND ({column} < '{high}')")
            }
            Operator::NotBetween => {
                let (low, high) = self.pair_texts(rule)?;
                format!("({column} < '{low}') AND ({column} > '{high}')")
            }
        };

        Ok(sql)
    }

    /// Normalized and escaped text of one value, without surrounding quotes
    fn literal(&self, scalar: &Scalar, type_tag: &TypeTag) -> String {
        let text = normalize(scalar, type_tag);
        self.options
            .dialect
            .escape_literal(&text, self.options.escaping)
    }

    fn scalar_text(&self, rule: &Rule) -> Result<String> {
        match &rule.value {
            RuleValue::Scalar(scalar) => Ok(self.literal(scalar, &rule.type_tag)),
            RuleValue::List(items) if items.len() == 1 => {
                Ok(self.literal(&items[0], &rule.type_tag))
            }
            other => Err(arity_error(rule.operator, other)),
        }
    }

    fn list_texts(&self, rule: &Rule) -> Result<Vec<String>> {
        match &rule.value {
            RuleValue::List(items) if !items.is_empty() => Ok(items
                .iter()
                .map(|item| self.literal(item, &rule.type_tag))
                .collect()),
            RuleValue::Scalar(scalar) => Ok(vec![self.literal(scalar, &rule.type_tag)]),
            other => Err(arity_error(rule.operator, other)),
        }
    }

    fn pair_texts(&self, rule: &Rule) -> Result<(String, String)> {
        match &rule.value {
            RuleValue::Pair(low, high) => Ok((
                self.literal(low, &rule.type_tag),
                self.literal(high, &rule.type_tag),
            )),
            RuleValue::List(items) if items.len() == 2 => Ok((
                self.literal(&items[0], &rule.type_tag),
                self.literal(&items[1], &rule.type_tag),
            )),
            other => Err(arity_error(rule.operator, other)),
        }
    }
}

fn wrap(body: &str) -> String {
    format!(" ( {body} ) ")
}

fn arity_error(operator: Operator, value: &RuleValue) -> Error {
    Error::InvalidValueArity {
        operator,
        expected: operator.arity(),
        found: value.shape(),
    }
}

/// A decoded payload with nothing to filter on: `null` or a group without rules
pub(crate) fn is_empty_filter(json: &Json) -> bool {
    match json {
        Json::Null => true,
        Json::Object(object) => matches!(object.get("rules"), Some(Json::Array(rules)) if rules.is_empty()),
        _ => false,
    }
}

/// Compiles a filter tree with default options.
pub fn compile(node: &FilterNode, target: &str) -> Result<String> {
    Compiler::new().compile(node, target)
}

/// Decodes and compiles filter JSON with default options.
pub fn compile_json(text: &str, target: &str) -> Result<Option<String>> {
    Compiler::new().compile_json(text, target)
}
