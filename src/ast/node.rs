use serde::Serialize;

use crate::ast::{Condition, Operator, TypeTag};
use crate::value::RuleValue;

/// A node of the filter tree.
///
/// Trees are built once from the incoming payload and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterNode {
    Group(Group),
    Rule(Rule),
}

/// Children joined by one logical connective, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub condition: Condition,
    pub children: Vec<FilterNode>,
}

/// A single comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    /// Field identifier from the rule builder (display only, never emitted)
    pub field: String,
    pub type_tag: TypeTag,
    pub operator: Operator,
    pub value: RuleValue,
}

impl Group {
    pub fn new(condition: Condition, children: Vec<FilterNode>) -> Self {
        Group {
            condition,
            children,
        }
    }

    pub fn and(children: Vec<FilterNode>) -> Self {
        Group::new(Condition::And, children)
    }

    pub fn or(children: Vec<FilterNode>) -> Self {
        Group::new(Condition::Or, children)
    }
}

impl Rule {
    pub fn new(
        field: impl Into<String>,
        type_tag: TypeTag,
        operator: Operator,
        value: RuleValue,
    ) -> Self {
        Rule {
            field: field.into(),
            type_tag,
            operator,
            value,
        }
    }
}

impl From<Group> for FilterNode {
    fn from(group: Group) -> Self {
        FilterNode::Group(group)
    }
}

impl From<Rule> for FilterNode {
    fn from(rule: Rule) -> Self {
        FilterNode::Rule(rule)
    }
}
