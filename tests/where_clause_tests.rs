// tests/where_clause_tests.rs

use rulesql::{Compiler, Error, WhereClause};
use tracing_test::traced_test;

const TITLE_FILTER: &str = r#"{
  "condition": "AND",
  "rules": [
    {"id": "title", "field": "title", "type": "string", "input": "text", "operator": "contains", "value": "news"}
  ],
  "valid": true
}"#;

fn existing_clause() -> WhereClause {
    let mut clause = WhereClause::new();
    clause.push("`pid` = 42");
    clause.push("`deleted` = 0");
    clause
}

#[test]
fn test_filter_appended_with_and() {
    let mut clause = existing_clause();
    let added = clause
        .push_filter(Some(TITLE_FILTER), "title", &Compiler::new())
        .unwrap();

    assert!(added);
    assert_eq!(
        clause.to_string(),
        "`pid` = 42 AND `deleted` = 0 AND  ( `title` LIKE '%news%' ) "
    );
}

#[test]
fn test_filter_on_empty_clause() {
    let mut clause = WhereClause::new();
    clause
        .push_filter(Some(TITLE_FILTER), "title", &Compiler::new())
        .unwrap();

    assert_eq!(clause.conditions().len(), 1);
    assert_eq!(clause.to_string(), " ( `title` LIKE '%news%' ) ");
}

#[test]
fn test_absent_payload_adds_nothing() {
    let mut clause = existing_clause();
    assert!(!clause.push_filter(None, "title", &Compiler::new()).unwrap());
    assert!(!clause.push_filter(Some("  "), "title", &Compiler::new()).unwrap());
    assert_eq!(clause, existing_clause());
}

#[test]
fn test_filter_without_rules_adds_nothing() {
    let mut clause = WhereClause::new();
    let added = clause
        .push_filter(
            Some(r#"{"condition":"AND","rules":[],"valid":false}"#),
            "title",
            &Compiler::new(),
        )
        .unwrap();

    assert!(!added);
    assert!(clause.is_empty());
}

#[test]
#[traced_test]
fn test_undecodable_payload_is_skipped() {
    let mut clause = existing_clause();
    let added = clause
        .push_filter(Some("{\"condition\": "), "title", &Compiler::new())
        .unwrap();

    assert!(!added);
    assert_eq!(clause, existing_clause());
    assert!(logs_contain("skipping undecodable filter payload"));
}

#[test]
#[traced_test]
fn test_non_object_payload_is_skipped() {
    let mut clause = WhereClause::new();
    assert!(!clause.push_filter(Some("false"), "title", &Compiler::new()).unwrap());
    assert!(logs_contain("not an object"));
}

#[test]
fn test_compile_error_propagates() {
    let mut clause = existing_clause();
    let result = clause.push_filter(
        Some(r#"{"condition":"AND","rules":[{"field":"title","operator":"between","value":7}]}"#),
        "title",
        &Compiler::new(),
    );

    assert!(matches!(result, Err(Error::InvalidValueArity { .. })));
    assert_eq!(clause, existing_clause());
}
