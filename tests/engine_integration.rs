//! End-to-end tests for rules, rule sets and the engine

use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tollgate::prelude::*;
use tollgate::validator::{check, And, Not};
use tollgate::validators::*;

#[derive(Debug, Clone, Default)]
struct Address {
    city: Option<String>,
    zip: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct Customer {
    name: PropertyValue<String>,
    nickname: PropertyValue<String>,
    age: PropertyValue<u32>,
    tags: Vec<String>,
    birthday: Option<NaiveDate>,
    address: Option<Address>,
}

fn name() -> Accessor<Customer, String> {
    Accessor::new(|c: &Customer| Ok(c.name.clone()))
}

fn city() -> Accessor<Customer, String> {
    Accessor::new(|c: &Customer| {
        Ok(c.address
            .as_ref()
            .or_missing("address")?
            .city
            .clone()
            .into())
    })
}

fn zip() -> Accessor<Customer, String> {
    Accessor::new(|c: &Customer| {
        Ok(c.address.as_ref().or_missing("address")?.zip.clone().into())
    })
}

fn name_rule() -> PropertyValidationRule<Customer, String> {
    PropertyValidationRule::when_defined(
        "name",
        name(),
        vec![ConfiguredValidator::new(is_not_empty())
            .with_code("NAME_EMPTY")
            .with_message("name must not be empty")],
    )
    .unwrap()
}

fn customer_rules() -> RuleSet<Customer> {
    let cutoff = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();

    RuleSet::new()
        .with_rule(name_rule())
        .with_rule(
            PropertyValidationRule::when_not_null(
                "nickname",
                Accessor::new(|c: &Customer| Ok(c.nickname.clone())),
                vec![
                    ConfiguredValidator::new(has_max_number_of_elements(8))
                        .with_code("NICK_LONG"),
                    ConfiguredValidator::new(is_lowercase()).with_code("NICK_CASE"),
                ],
            )
            .unwrap(),
        )
        .with_rule(
            PropertyValidationRule::when_defined(
                "age",
                Accessor::new(|c: &Customer| Ok(c.age)),
                vec![ConfiguredValidator::new(is_between(18, 130))
                    .with_code("AGE_RANGE")
                    .with_message("age must be between 18 and 130")],
            )
            .unwrap(),
        )
        .with_rule(
            PropertyValidationRule::when_defined(
                "tags",
                Accessor::new(|c: &Customer| Ok(PropertyValue::Defined(c.tags.clone()))),
                vec![ConfiguredValidator::new(has_max_number_of_elements(3))
                    .with_code("TOO_MANY_TAGS")],
            )
            .unwrap(),
        )
        .with_rule(
            PropertyValidationRule::when_not_null(
                "birthday",
                Accessor::new(|c: &Customer| Ok(PropertyValue::from(c.birthday))),
                vec![ConfiguredValidator::new(is_before(cutoff)).with_code("TOO_YOUNG")],
            )
            .unwrap(),
        )
        .with_rule(
            PropertyValidationRule::when_not_null(
                "address.city",
                city(),
                vec![ConfiguredValidator::new(is_not_empty()).with_code("CITY_EMPTY")],
            )
            .unwrap(),
        )
        .with_rule(
            PropertyValidationRule::when_not_null(
                "address.zip",
                zip(),
                vec![ConfiguredValidator::new(matches(r"^\d{5}$").unwrap())
                    .with_code("ZIP_FORMAT")],
            )
            .unwrap(),
        )
}

fn valid_customer() -> Customer {
    Customer {
        name: PropertyValue::Defined("Ada".to_string()),
        nickname: PropertyValue::Defined("ada".to_string()),
        age: PropertyValue::Defined(36),
        tags: vec!["vip".to_string()],
        birthday: NaiveDate::from_ymd_opt(1988, 12, 10),
        address: Some(Address {
            city: Some("London".to_string()),
            zip: Some("12345".to_string()),
        }),
    }
}

#[test]
fn empty_name_fails_once() {
    let rules = RuleSet::new().with_rule(name_rule());
    let customer = Customer {
        name: PropertyValue::Defined(String::new()),
        ..Customer::default()
    };

    let result = rules.validate(&customer);
    assert!(result.is_invalid());
    assert_eq!(result.failure_count(), 1);
    assert_eq!(result.failures()[0].target(), Some("name"));
}

#[test]
fn present_name_is_valid() {
    let rules = RuleSet::new().with_rule(name_rule());
    let customer = Customer {
        name: PropertyValue::Defined("ok".to_string()),
        ..Customer::default()
    };
    assert!(rules.validate(&customer).is_valid());
}

#[test]
fn absent_name_is_valid() {
    let rules = RuleSet::new().with_rule(name_rule());
    assert!(rules.validate(&Customer::default()).is_valid());
}

#[test]
fn fully_populated_customer_is_valid() {
    let result = customer_rules().validate(&valid_customer());
    assert!(result.is_valid(), "unexpected failures: {}", result);
}

#[test]
fn empty_customer_only_checks_defined_properties() {
    // Only the tags accessor always yields a value; an empty list is fine.
    let result = customer_rules().validate(&Customer::default());
    assert!(result.is_valid());
}

#[test]
fn failures_come_back_in_declaration_order() {
    let customer = Customer {
        name: PropertyValue::Defined(String::new()),
        nickname: PropertyValue::Defined("MuchTooLongNick".to_string()),
        age: PropertyValue::Defined(12),
        tags: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        birthday: NaiveDate::from_ymd_opt(2015, 6, 1),
        address: Some(Address {
            city: Some(String::new()),
            zip: Some("ABCDE".to_string()),
        }),
    };

    let result = customer_rules().validate(&customer);

    assert_eq!(
        result.failure_codes(),
        vec![
            "NAME_EMPTY",
            "NICK_LONG",
            "NICK_CASE",
            "AGE_RANGE",
            "TOO_MANY_TAGS",
            "TOO_YOUNG",
            "CITY_EMPTY",
            "ZIP_FORMAT",
        ]
    );
    assert_eq!(
        result.failure_messages(),
        vec!["name must not be empty", "age must be between 18 and 130"]
    );
}

#[test]
fn missing_intermediate_object_skips_nested_rules() {
    let customer = Customer {
        address: None,
        ..valid_customer()
    };
    assert!(customer_rules().validate(&customer).is_valid());
}

#[test]
fn unset_nested_property_is_skipped() {
    let customer = Customer {
        address: Some(Address {
            city: None,
            zip: Some("00000".to_string()),
        }),
        ..valid_customer()
    };
    assert!(customer_rules().validate(&customer).is_valid());
}

#[test]
fn null_is_validated_by_when_defined() {
    let rules = RuleSet::new().with_rule(
        PropertyValidationRule::when_defined(
            "name",
            name(),
            vec![ConfiguredValidator::new(is_not_null()).with_code("NAME_NULL")],
        )
        .unwrap(),
    );
    let customer = Customer {
        name: PropertyValue::Null,
        ..Customer::default()
    };

    assert_eq!(rules.validate(&customer).failure_codes(), vec!["NAME_NULL"]);
}

#[test]
fn custom_condition_and_combinators() {
    let adults_only = |c: &Customer| matches!(c.age, PropertyValue::Defined(age) if age >= 18);
    let rule = PropertyValidationRule::new(
        "nickname",
        Accessor::new(|c: &Customer| Ok(c.nickname.clone())),
        adults_only,
        vec![ConfiguredValidator::new(And(is_not_empty(), Not(contains("_"))))
            .with_code("NICK_INVALID")],
    )
    .unwrap();

    let minor = Customer {
        age: PropertyValue::Defined(10),
        nickname: PropertyValue::Defined("bad_nick".to_string()),
        ..Customer::default()
    };
    let adult = Customer {
        age: PropertyValue::Defined(40),
        ..minor.clone()
    };

    let rules = RuleSet::new().with_rule(rule);
    assert!(rules.validate(&minor).is_valid());
    assert_eq!(rules.validate(&adult).failure_codes(), vec!["NICK_INVALID"]);
}

#[test]
fn plain_predicates_lift_into_validators() {
    let rules = RuleSet::new().with_rule(
        PropertyValidationRule::when_defined(
            "age",
            Accessor::new(|c: &Customer| Ok(c.age)),
            vec![ConfiguredValidator::new(check(|age: &u32| age % 2 == 0)).with_code("ODD")],
        )
        .unwrap(),
    );
    let customer = Customer {
        age: PropertyValue::Defined(21),
        ..Customer::default()
    };
    assert_eq!(rules.validate(&customer).failure_codes(), vec!["ODD"]);
}

#[test]
fn empty_validator_list_is_a_configuration_fault() {
    let err = PropertyValidationRule::when_defined("name", name(), Vec::new()).unwrap_err();
    assert!(matches!(err, RuleError::NoValidators { ref property } if property == "name"));
    assert_eq!(err.to_string(), "rule for property 'name' has no validators");
}

#[test]
fn invalid_pattern_is_a_configuration_fault() {
    let err = matches("[0-9").unwrap_err();
    assert!(matches!(err, RuleError::InvalidPattern { ref pattern, .. } if pattern == "[0-9"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn rule_sets_are_shared_across_threads() {
    let rules = Arc::new(customer_rules());

    let handles: Vec<_> = (0..4u32)
        .map(|i| {
            let rules = Arc::clone(&rules);
            thread::spawn(move || {
                let customer = Customer {
                    age: PropertyValue::Defined(10 + i * 5),
                    ..valid_customer()
                };
                rules.validate(&customer).failure_count()
            })
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    // ages 10, 15 fail; 20, 25 pass
    assert_eq!(counts, vec![1, 1, 0, 0]);
}

#[test]
fn engine_runs_heterogeneous_rules_from_one_list() {
    let age = PropertyValidationRule::when_defined(
        "age",
        Accessor::new(|c: &Customer| Ok(c.age)),
        vec![ConfiguredValidator::new(is_positive::<u32>()).with_code("AGE_ZERO")],
    )
    .unwrap();
    let rules: Vec<Box<dyn ValidationRule<Customer>>> = vec![Box::new(name_rule()), Box::new(age)];

    let customer = Customer {
        name: PropertyValue::Defined(String::new()),
        age: PropertyValue::Defined(0),
        ..Customer::default()
    };

    let result = ValidationEngine::new().validate(&customer, &rules);
    assert_eq!(result.failure_codes(), vec!["NAME_EMPTY", "AGE_ZERO"]);
}
