// tests/normalize_tests.rs

use rulesql::{Scalar, TypeTag, normalize::normalize};

const ALL_TYPES: [TypeTag; 7] = [
    TypeTag::String,
    TypeTag::Integer,
    TypeTag::Double,
    TypeTag::Boolean,
    TypeTag::Date,
    TypeTag::Time,
    TypeTag::Datetime,
];

#[test]
fn test_double_number_drops_zero_fraction() {
    assert_eq!(normalize(&Scalar::Float(42.00), &TypeTag::Double), "42");
    assert_eq!(normalize(&Scalar::Float(42.50), &TypeTag::Double), "42.5");
    assert_eq!(normalize(&Scalar::Float(42.55), &TypeTag::Double), "42.55");
    assert_eq!(normalize(&Scalar::Integer(-5), &TypeTag::Double), "-5");
}

#[test]
fn test_double_comma_string_keeps_digits() {
    assert_eq!(normalize(&Scalar::from("42,50"), &TypeTag::Double), "42.50");
    assert_eq!(normalize(&Scalar::from("42,5"), &TypeTag::Double), "42.5");
}

#[test]
fn test_comma_and_number_paths_differ() {
    let from_string = normalize(&Scalar::from("42,50"), &TypeTag::Double);
    let from_number = normalize(&Scalar::Float(42.50), &TypeTag::Double);
    assert_ne!(from_string, from_number);
}

#[test]
fn test_double_plain_string_untouched() {
    assert_eq!(normalize(&Scalar::from("42.50"), &TypeTag::Double), "42.50");
    assert_eq!(normalize(&Scalar::from("foo"), &TypeTag::Double), "foo");
}

#[test]
fn test_other_types_pass_through() {
    for type_tag in ALL_TYPES.iter().filter(|t| **t != TypeTag::Double) {
        assert_eq!(normalize(&Scalar::from("42,5"), type_tag), "42,5");
        assert_eq!(normalize(&Scalar::Float(42.5), type_tag), "42.5");
        assert_eq!(normalize(&Scalar::Integer(42), type_tag), "42");
    }
    assert_eq!(
        normalize(&Scalar::from("2017-06-26 17:55"), &TypeTag::Datetime),
        "2017-06-26 17:55"
    );
}

#[test]
fn test_booleans_render_as_digits() {
    assert_eq!(normalize(&Scalar::Boolean(true), &TypeTag::Boolean), "1");
    assert_eq!(normalize(&Scalar::Boolean(false), &TypeTag::Boolean), "0");
}

#[test]
fn test_normalization_is_idempotent() {
    let inputs = [
        Scalar::from("42.5"),
        Scalar::from("42,50"),
        Scalar::Float(42.0),
        Scalar::Float(0.125),
        Scalar::Integer(-5),
        Scalar::from("foo"),
    ];

    for type_tag in &ALL_TYPES {
        for input in &inputs {
            let once = normalize(input, type_tag);
            let twice = normalize(&Scalar::from(once.as_str()), type_tag);
            assert_eq!(once, twice, "{input:?} as {type_tag}");
        }
    }
}
