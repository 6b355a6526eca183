//! Serialization of reporting types

#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use serde_json::json;
use tollgate::{PropertyValue, ValidationFailure, ValidationResult};

#[test]
fn result_serializes_for_reporting() {
    let mut result = ValidationResult::new();
    result.add_failure(
        ValidationFailure::new()
            .with_code("NAME_EMPTY")
            .with_message("name must not be empty")
            .with_target("name"),
    );

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({
            "failures": [{
                "code": "NAME_EMPTY",
                "message": "name must not be empty",
                "target": "name"
            }]
        })
    );
}

#[test]
fn result_deserializes_back() {
    let raw = r#"{"failures":[{"code":null,"message":"too short","target":"bio"}]}"#;
    let result: ValidationResult = serde_json::from_str(raw).unwrap();

    assert!(result.is_invalid());
    assert_eq!(result.failure_messages(), vec!["too short"]);
    assert!(result.failure_codes().is_empty());
}

#[test]
fn property_values_keep_their_state() {
    let values = vec![
        PropertyValue::Undefined,
        PropertyValue::Null,
        PropertyValue::Defined(7),
    ];
    let encoded = serde_json::to_string(&values).unwrap();
    let decoded: Vec<PropertyValue<i32>> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, values);
}
