//! Operator reference for `rulesql operators`

use crate::{
    ast::{Arity, FilterNode, Operator, Rule, TypeTag},
    compiler::Compiler,
    value::{RuleValue, Scalar},
};

/// SQL emitted for `operator` against a column named `field`, using
/// placeholder values `v`, `v1`, `v2`.
pub fn sql_shape(operator: Operator) -> String {
    let value = match operator.arity() {
        Arity::None => RuleValue::None,
        Arity::Scalar => RuleValue::Scalar(Scalar::from("v")),
        Arity::List => RuleValue::List(vec![Scalar::from("v1"), Scalar::from("v2")]),
        Arity::Pair => RuleValue::Pair(Scalar::from("v1"), Scalar::from("v2")),
    };
    let rule = FilterNode::from(Rule::new("field", TypeTag::String, operator, value));

    // placeholder values always match the operator's arity
    Compiler::new()
        .compile(&rule, "field")
        .map(|sql| sql.trim().to_string())
        .unwrap_or_default()
}

/// Get the operator table
pub fn operator_reference() -> String {
    let mut out = String::from("OPERATORS\n\n");
    out.push_str(&format!("  {:<18} {:<18} {}\n", "OPERATOR", "VALUE", "SQL"));

    for operator in Operator::ALL {
        out.push_str(&format!(
            "  {:<18} {:<18} {}\n",
            operator.tag(),
            operator.arity().to_string(),
            sql_shape(operator)
        ));
    }

    out.push_str(
        "\nLists are separated by ';' (not_in also accepts ','). \
         Pairs are a two-element array or \"low,high\".\n",
    );
    out
}
