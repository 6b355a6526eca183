//! # Tollgate
//!
//! Conditional property validation for Rust.
//!
//! Tollgate checks the properties of an object against declared rules and
//! collects every violation instead of stopping at the first one.
//!
//! ## Building blocks
//!
//! - [`PropertyValue`]: a property that is undefined, null, or holds a value
//! - [`Accessor`]: reads one property from its owner and may fail
//! - [`PropertyValidator`]: a yes/no check on a property value
//! - [`ValidationCondition`]: decides whether a rule runs at all
//!   ([`WhenDefined`], [`WhenNotNull`])
//! - [`PropertyValidationRule`]: property name, accessor, condition and
//!   validators, each configured with an optional code and message
//! - [`ValidationEngine`] and [`RuleSet`]: evaluate rules in order and gather
//!   the failures into a [`ValidationResult`]
//!
//! ## Quick Example
//!
//! ```rust
//! use tollgate::prelude::*;
//! use tollgate::validators::{is_greater_than_or_equal, is_not_empty, matches};
//!
//! struct Signup {
//!     email: PropertyValue<String>,
//!     age: PropertyValue<u32>,
//! }
//!
//! let rules = RuleSet::new()
//!     .with_rule(
//!         PropertyValidationRule::when_not_null(
//!             "email",
//!             Accessor::new(|s: &Signup| Ok(s.email.clone())),
//!             vec![
//!                 ConfiguredValidator::new(is_not_empty()).with_code("EMAIL_EMPTY"),
//!                 ConfiguredValidator::new(matches(r"^[^@]+@[^@]+$").unwrap())
//!                     .with_code("EMAIL_FORMAT")
//!                     .with_message("email is malformed"),
//!             ],
//!         )
//!         .unwrap(),
//!     )
//!     .with_rule(
//!         PropertyValidationRule::when_defined(
//!             "age",
//!             Accessor::new(|s: &Signup| Ok(s.age)),
//!             vec![ConfiguredValidator::new(is_greater_than_or_equal(18))
//!                 .with_code("AGE_MIN")],
//!         )
//!         .unwrap(),
//!     );
//!
//! let result = rules.validate(&Signup {
//!     email: PropertyValue::Defined("nobody".to_string()),
//!     age: PropertyValue::Defined(16),
//! });
//!
//! assert!(result.is_invalid());
//! assert_eq!(result.failure_codes(), vec!["EMAIL_FORMAT", "AGE_MIN"]);
//!
//! // Undefined and null properties are skipped by their conditions.
//! let skipped = rules.validate(&Signup {
//!     email: PropertyValue::Null,
//!     age: PropertyValue::Undefined,
//! });
//! assert!(skipped.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod condition;
pub mod engine;
pub mod error;
pub mod failure;
pub mod result;
pub mod rule;
pub mod testing;
pub mod validator;
pub mod validators;
pub mod value;

// Re-exports
pub use condition::{ValidationCondition, WhenDefined, WhenNotNull};
pub use engine::{RuleSet, ValidationEngine};
pub use error::{AccessError, AccessExt, RuleError};
pub use failure::ValidationFailure;
pub use result::ValidationResult;
pub use rule::{ConfiguredValidator, PropertyValidationRule, ValidationRule};
pub use validator::{PropertyValidator, PropertyValidatorExt};
pub use value::{AccessResult, Accessor, PropertyValue};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::condition::{ValidationCondition, WhenDefined, WhenNotNull};
    pub use crate::engine::{RuleSet, ValidationEngine};
    pub use crate::error::{AccessError, AccessExt, RuleError};
    pub use crate::failure::ValidationFailure;
    pub use crate::result::ValidationResult;
    pub use crate::rule::{ConfiguredValidator, PropertyValidationRule, ValidationRule};
    pub use crate::validator::{PropertyValidator, PropertyValidatorExt};
    pub use crate::value::{AccessResult, Accessor, PropertyValue};
}
