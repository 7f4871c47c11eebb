// tests/cli_tests.rs

use rulesql::cli::{
    CheckOptions, CheckResult, CliError, CompileRequest, execute_check, execute_compile,
    operator_reference, sql_shape,
};
use rulesql::{CompileOptions, Dialect, Error, Operator};

const FILTER: &str = r#"{"condition":"AND","rules":[{"id":"title","field":"title","type":"double","input":"number","operator":"less","value":"9,99"}],"valid":true}"#;

// ============================================================================
// compile
// ============================================================================

#[test]
fn test_compile_request() {
    let request = CompileRequest {
        target: "price".to_string(),
        filter: Some(FILTER.to_string()),
        options: CompileOptions::default(),
    };

    assert_eq!(
        execute_compile(&request).unwrap().as_deref(),
        Some(" ( `price` < '9.99' ) ")
    );
}

#[test]
fn test_compile_request_ansi() {
    let request = CompileRequest {
        target: "shop.price".to_string(),
        filter: Some(FILTER.to_string()),
        options: CompileOptions::default().dialect(Dialect::Ansi),
    };

    assert_eq!(
        execute_compile(&request).unwrap().as_deref(),
        Some(r#" ( "shop"."price" < '9.99' ) "#)
    );
}

#[test]
fn test_compile_without_input() {
    let request = CompileRequest {
        target: "price".to_string(),
        ..Default::default()
    };
    assert!(matches!(execute_compile(&request), Err(CliError::NoInput)));
}

#[test]
fn test_compile_error_message() {
    let request = CompileRequest {
        target: "price".to_string(),
        filter: Some(r#"{"condition":"AND","rules":[{"field":"p","operator":"like"}]}"#.into()),
        options: CompileOptions::default(),
    };

    let err = execute_compile(&request).unwrap_err();
    assert!(matches!(err, CliError::Filter(Error::UnsupportedOperator { .. })));
    assert_eq!(err.to_string(), "unsupported operator 'like'");
}

// ============================================================================
// check
// ============================================================================

#[test]
fn test_check_valid() {
    let options = CheckOptions {
        filter: Some(FILTER.to_string()),
        ast: false,
    };
    assert!(matches!(execute_check(&options).unwrap(), CheckResult::Valid));
}

#[test]
fn test_check_ast() {
    let options = CheckOptions {
        filter: Some(FILTER.to_string()),
        ast: true,
    };

    let CheckResult::Tree(tree) = execute_check(&options).unwrap() else {
        panic!("expected a tree");
    };
    let rule = &tree["group"]["children"][0]["rule"];
    assert_eq!(tree["group"]["condition"], "AND");
    assert_eq!(rule["operator"], "less");
    assert_eq!(rule["type_tag"], "double");
    assert_eq!(rule["value"]["scalar"], "9,99");
}

#[test]
fn test_check_invalid() {
    let options = CheckOptions {
        filter: Some("[]".to_string()),
        ast: false,
    };
    assert!(matches!(
        execute_check(&options),
        Err(CliError::Filter(Error::Malformed { .. }))
    ));
}

// ============================================================================
// operators
// ============================================================================

#[test]
fn test_sql_shapes() {
    assert_eq!(sql_shape(Operator::Equal), "( `field` = 'v' )");
    assert_eq!(
        sql_shape(Operator::NotIn),
        "( `field` != 'v1' || `field` != 'v2' )"
    );
    assert_eq!(
        sql_shape(Operator::NotBetween),
        "( (`field` < 'v1') AND (`field` > 'v2') )"
    );
}

#[test]
fn test_operator_reference_lists_every_operator() {
    let reference = operator_reference();
    for operator in Operator::ALL {
        assert!(
            reference.contains(operator.tag()),
            "missing {}",
            operator.tag()
        );
    }
    assert!(reference.contains("`field` IN ('v1','v2')"));
}
