//! Nested rules example
//!
//! Declares a rule set over a struct with an optional nested address and
//! shows how conditions decide which rules run.
//!
//! Run with: cargo run --example nested_rules

use tollgate::prelude::*;
use tollgate::validator::{check, And, Not};
use tollgate::validators::*;

#[derive(Debug, Clone, Default)]
struct Address {
    street: Option<String>,
    zip: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct Order {
    reference: PropertyValue<String>,
    quantity: PropertyValue<u32>,
    coupon: PropertyValue<String>,
    shipping: Option<Address>,
}

fn order_rules() -> Result<RuleSet<Order>, RuleError> {
    let rules = RuleSet::new()
        .with_rule(PropertyValidationRule::when_defined(
            "reference",
            Accessor::new(|o: &Order| Ok(o.reference.clone())),
            vec![
                ConfiguredValidator::new(is_not_empty())
                    .with_code("REF_EMPTY")
                    .with_message("reference must not be empty"),
                ConfiguredValidator::new(matches(r"^ORD-\d+$")?)
                    .with_code("REF_FORMAT")
                    .with_message("reference must look like ORD-123"),
            ],
        )?)
        .with_rule(PropertyValidationRule::when_not_null(
            "quantity",
            Accessor::new(|o: &Order| Ok(o.quantity)),
            vec![ConfiguredValidator::new(is_between(1, 100))
                .with_code("QTY_RANGE")
                .with_message("quantity must be between 1 and 100")],
        )?)
        .with_rule(PropertyValidationRule::when_not_null(
            "coupon",
            Accessor::new(|o: &Order| Ok(o.coupon.clone())),
            vec![ConfiguredValidator::new(And(is_uppercase(), Not(contains(" "))))
                .with_code("COUPON_FORMAT")],
        )?)
        .with_rule(PropertyValidationRule::when_not_null(
            "shipping.zip",
            Accessor::new(|o: &Order| {
                Ok(o.shipping.as_ref().or_missing("shipping")?.zip.clone().into())
            }),
            vec![ConfiguredValidator::new(check(|zip: &String| {
                zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit())
            }))
            .with_code("ZIP_FORMAT")
            .with_message("zip must be five digits")],
        )?);

    Ok(rules)
}

fn report(label: &str, rules: &RuleSet<Order>, order: &Order) {
    let result = rules.validate(order);
    println!("{}:", label);
    if result.is_valid() {
        println!("  valid");
    }
    for failure in &result {
        println!("  {}", failure);
    }
    println!();
}

fn main() -> Result<(), RuleError> {
    println!("=== Nested Rules Example ===\n");

    let rules = order_rules()?;
    println!("rules run in order: {:?}\n", rules.properties());

    // Everything present and well formed
    let complete = Order {
        reference: PropertyValue::Defined("ORD-42".to_string()),
        quantity: PropertyValue::Defined(3),
        coupon: PropertyValue::Defined("SPRING".to_string()),
        shipping: Some(Address {
            street: Some("1 Main St".to_string()),
            zip: Some("12345".to_string()),
        }),
    };
    report("complete order", &rules, &complete);

    // Undefined and null properties are skipped; no shipping address means
    // the nested rule is skipped too.
    let sparse = Order {
        coupon: PropertyValue::Null,
        ..Order::default()
    };
    report("sparse order", &rules, &sparse);

    // Every rule reports, in declaration order
    let broken = Order {
        reference: PropertyValue::Defined(String::new()),
        quantity: PropertyValue::Defined(0),
        coupon: PropertyValue::Defined("spring sale".to_string()),
        shipping: Some(Address {
            street: None,
            zip: Some("12a".to_string()),
        }),
    };
    report("broken order", &rules, &broken);

    let result = rules.validate(&broken);
    println!("codes: {:?}", result.failure_codes());
    println!("messages: {:?}", result.failure_messages());

    if let Some(address) = &broken.shipping {
        println!("street on file: {:?}", address.street);
    }

    Ok(())
}
