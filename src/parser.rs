//! Builds a [`FilterNode`] tree from rule-builder JSON.
//!
//! Objects carrying `rules` are groups, objects carrying `operator` are rules.
//! The `valid`, `id` and `input` keys are accepted and ignored. Each rule's
//! value is shaped here, once, according to its operator's arity.

use serde_json::Value as Json;
use tracing::trace;

use crate::{
    ast::{Arity, Condition, FilterNode, Group, Operator, Rule, TypeTag},
    error::{Error, Result},
    value::{RuleValue, Scalar},
};

const ROOT_PATH: &str = "filter";

/// Parse filter JSON text.
///
/// # Examples
///
/// ```
/// use rulesql::parser::parse_filter;
/// use rulesql::ast::FilterNode;
///
/// let tree = parse_filter(r#"{"condition":"AND","rules":[
///     {"field":"title","type":"string","operator":"is_null"}
/// ]}"#).unwrap();
///
/// let FilterNode::Group(group) = tree else { panic!("root is a group") };
/// assert_eq!(group.children.len(), 1);
/// ```
pub fn parse_filter(text: &str) -> Result<FilterNode> {
    let json: Json = serde_json::from_str(text)?;
    parse_value(&json)
}

/// Parse an already decoded filter object.
pub fn parse_value(json: &Json) -> Result<FilterNode> {
    parse_node(json, ROOT_PATH)
}

fn parse_node(json: &Json, path: &str) -> Result<FilterNode> {
    let Json::Object(object) = json else {
        return Err(Error::malformed(path, "expected an object"));
    };

    if object.contains_key("rules") {
        parse_group(json, path).map(FilterNode::Group)
    } else if object.contains_key("operator") {
        parse_rule(json, path).map(FilterNode::Rule)
    } else {
        Err(Error::malformed(
            path,
            "expected a group (with 'rules') or a rule (with 'operator')",
        ))
    }
}

fn parse_group(json: &Json, path: &str) -> Result<Group> {
    let condition = match json.get("condition") {
        Some(Json::String(s)) => s
            .parse::<Condition>()
            .map_err(|reason| Error::malformed(&format!("{path}.condition"), reason))?,
        Some(_) => {
            return Err(Error::malformed(
                &format!("{path}.condition"),
                "expected \"AND\" or \"OR\"",
            ));
        }
        None => return Err(Error::malformed(path, "group without 'condition'")),
    };

    let Some(Json::Array(rules)) = json.get("rules") else {
        return Err(Error::malformed(&format!("{path}.rules"), "expected an array"));
    };

    let children = rules
        .iter()
        .enumerate()
        .map(|(i, child)| parse_node(child, &format!("{path}.rules[{i}]")))
        .collect::<Result<Vec<_>>>()?;

    Ok(Group::new(condition, children))
}

fn parse_rule(json: &Json, path: &str) -> Result<Rule> {
    let operator = match json.get("operator") {
        Some(Json::String(tag)) => tag.parse::<Operator>()?,
        _ => {
            return Err(Error::malformed(
                &format!("{path}.operator"),
                "expected an operator name",
            ));
        }
    };

    // `id` and `field` are the same in every payload the rule builder emits
    let field = json
        .get("field")
        .or_else(|| json.get("id"))
        .and_then(Json::as_str)
        .ok_or_else(|| Error::malformed(path, "rule without 'field'"))?
        .to_string();

    let type_tag = match json.get("type") {
        Some(Json::String(tag)) => TypeTag::parse(tag),
        None | Some(Json::Null) => TypeTag::String,
        Some(_) => {
            return Err(Error::malformed(&format!("{path}.type"), "expected a type name"));
        }
    };

    let value = shape_value(operator, json.get("value"), &format!("{path}.value"))?;
    trace!(%operator, %field, %type_tag, "parsed rule");

    Ok(Rule {
        field,
        type_tag,
        operator,
        value,
    })
}

fn shape_value(operator: Operator, json: Option<&Json>, path: &str) -> Result<RuleValue> {
    let arity_error = |found: String| Error::InvalidValueArity {
        operator,
        expected: operator.arity(),
        found,
    };

    match (operator.arity(), json) {
        (Arity::None, _) => Ok(RuleValue::None),
        (_, None | Some(Json::Null)) => Err(arity_error("no value".to_string())),

        (Arity::Scalar, Some(Json::Array(items))) => match items.as_slice() {
            [single] => Ok(RuleValue::Scalar(scalar(single, &format!("{path}[0]"))?)),
            _ => Err(arity_error(format!("a list of {} value(s)", items.len()))),
        },
        (Arity::Scalar, Some(json)) => Ok(RuleValue::Scalar(scalar(json, path)?)),

        (Arity::List, Some(Json::Array(items))) => {
            if items.is_empty() {
                return Err(arity_error("an empty list".to_string()));
            }
            let list = items
                .iter()
                .enumerate()
                .map(|(i, item)| scalar(item, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>>>()?;
            Ok(RuleValue::List(list))
        }
        (Arity::List, Some(Json::String(text))) => Ok(RuleValue::List(split_list(operator, text))),
        (Arity::List, Some(json)) => Ok(RuleValue::List(vec![scalar(json, path)?])),

        (Arity::Pair, Some(Json::Array(items))) => match items.as_slice() {
            [low, high] => Ok(RuleValue::Pair(
                scalar(low, &format!("{path}[0]"))?,
                scalar(high, &format!("{path}[1]"))?,
            )),
            _ => Err(arity_error(format!("a list of {} value(s)", items.len()))),
        },
        (Arity::Pair, Some(Json::String(text))) => {
            let parts: Vec<&str> = text.split(',').map(str::trim).collect();
            match parts.as_slice() {
                [low, high] => Ok(RuleValue::Pair(Scalar::from(*low), Scalar::from(*high))),
                _ => Err(arity_error(format!(
                    "{} comma-separated value(s)",
                    parts.len()
                ))),
            }
        }
        (Arity::Pair, Some(_)) => Err(arity_error("a single value".to_string())),
    }
}

/// Split a delimited list string.
///
/// `in` splits on `;` only, so decimal commas survive inside elements.
/// `not_in` also accepts a comma-separated list when no `;` is present.
fn split_list(operator: Operator, text: &str) -> Vec<Scalar> {
    if operator == Operator::NotIn && !text.contains(';') {
        return text.split(',').map(|s| Scalar::from(s.trim())).collect();
    }

    match operator {
        Operator::NotIn => text.split(';').map(|s| Scalar::from(s.trim())).collect(),
        _ => text.split(';').map(Scalar::from).collect(),
    }
}

fn scalar(json: &Json, path: &str) -> Result<Scalar> {
    match json {
        Json::String(s) => Ok(Scalar::Text(s.clone())),
        Json::Bool(b) => Ok(Scalar::Boolean(*b)),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Scalar::Integer(i))
            } else if n.is_u64() {
                Ok(Scalar::Text(n.to_string()))
            } else {
                n.as_f64()
                    .map(Scalar::Float)
                    .ok_or_else(|| Error::malformed(path, "number out of range"))
            }
        }
        Json::Null => Err(Error::malformed(path, "null inside a value list")),
        Json::Array(_) | Json::Object(_) => Err(Error::malformed(path, "expected a scalar value")),
    }
}
