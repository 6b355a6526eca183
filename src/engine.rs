//! Running rules against an object
//!
//! [`ValidationEngine`] performs one pass: it evaluates each rule in
//! declaration order and folds the failures into a fresh
//! [`ValidationResult`]. It keeps nothing between passes.
//!
//! [`RuleSet`] owns the rules for one object type so callers can declare them
//! once and validate many objects.
//!
//! # Example
//!
//! ```
//! use tollgate::validators::{is_between, is_not_empty};
//! use tollgate::{Accessor, ConfiguredValidator, PropertyValidationRule, PropertyValue, RuleSet};
//!
//! struct Account {
//!     login: PropertyValue<String>,
//!     age: PropertyValue<u8>,
//! }
//!
//! let rules = RuleSet::new()
//!     .with_rule(
//!         PropertyValidationRule::when_defined(
//!             "login",
//!             Accessor::new(|a: &Account| Ok(a.login.clone())),
//!             vec![ConfiguredValidator::new(is_not_empty()).with_message("login is empty")],
//!         )
//!         .unwrap(),
//!     )
//!     .with_rule(
//!         PropertyValidationRule::when_not_null(
//!             "age",
//!             Accessor::new(|a: &Account| Ok(a.age)),
//!             vec![ConfiguredValidator::new(is_between(18, 120))
//!                 .with_message("age out of range")],
//!         )
//!         .unwrap(),
//!     );
//!
//! let result = rules.validate(&Account {
//!     login: PropertyValue::Defined(String::new()),
//!     age: PropertyValue::Defined(12),
//! });
//!
//! assert_eq!(result.failure_messages(), vec!["login is empty", "age out of range"]);
//! ```

use std::fmt;

use crate::result::ValidationResult;
use crate::rule::ValidationRule;

/// Runs validation passes.
///
/// Stateless: every call to [`validate`](ValidationEngine::validate) starts
/// from an empty result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationEngine;

impl ValidationEngine {
    /// Creates an engine.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates `rules` in order against `owner`.
    ///
    /// Every rule runs; a failing rule never stops the pass.
    pub fn validate<'r, T, R, I>(&self, owner: &T, rules: I) -> ValidationResult
    where
        T: ?Sized,
        R: ValidationRule<T> + ?Sized + 'r,
        I: IntoIterator<Item = &'r R>,
    {
        let mut result = ValidationResult::new();

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("validation_pass").entered();

        #[cfg(feature = "tracing")]
        let mut evaluated = 0usize;

        for rule in rules {
            result.add_failures(rule.evaluate(owner));

            #[cfg(feature = "tracing")]
            {
                evaluated += 1;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rules = evaluated,
            failures = result.failure_count(),
            "validation pass complete"
        );

        result
    }
}

/// The rules declared for one object type.
///
/// Rules are evaluated in the order they were added. A rule set is immutable
/// while validating, so it can be shared between threads.
pub struct RuleSet<T: ?Sized> {
    rules: Vec<Box<dyn ValidationRule<T>>>,
    engine: ValidationEngine,
}

impl<T: ?Sized> RuleSet<T> {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            engine: ValidationEngine::new(),
        }
    }

    /// Appends a rule.
    pub fn push<R>(&mut self, rule: R)
    where
        R: ValidationRule<T> + 'static,
    {
        self.rules.push(Box::new(rule));
    }

    /// Appends a rule, builder style.
    pub fn with_rule<R>(mut self, rule: R) -> Self
    where
        R: ValidationRule<T> + 'static,
    {
        self.push(rule);
        self
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rule was added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Property names, in evaluation order.
    pub fn properties(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.property()).collect()
    }

    /// Runs one pass of every rule against `owner`.
    pub fn validate(&self, owner: &T) -> ValidationResult {
        self.engine.validate(owner, &self.rules)
    }
}

impl<T: ?Sized> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("properties", &self.properties())
            .finish()
    }
}
