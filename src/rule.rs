//! Rules binding a property to its condition and validators
//!
//! A [`PropertyValidationRule`] is the unit the engine iterates over. It knows
//! how to read one property, when to bother checking it, and which checks to
//! run. [`ValidationRule`] erases the property type so rules over `String`,
//! `u32` and `Vec<_>` properties of the same object can live side by side.
//!
//! # Example
//!
//! ```
//! use tollgate::validators::is_not_empty;
//! use tollgate::{Accessor, ConfiguredValidator, PropertyValidationRule, ValidationRule};
//!
//! struct User {
//!     name: Option<String>,
//! }
//!
//! let rule = PropertyValidationRule::when_defined(
//!     "name",
//!     Accessor::new(|u: &User| Ok(u.name.clone().into())),
//!     vec![ConfiguredValidator::new(is_not_empty()).with_code("EMPTY")],
//! )
//! .unwrap();
//!
//! let failures = rule.evaluate(&User { name: Some(String::new()) });
//! assert_eq!(failures.len(), 1);
//! assert_eq!(failures[0].code(), Some("EMPTY"));
//! assert_eq!(failures[0].target(), Some("name"));
//!
//! assert!(rule.evaluate(&User { name: None }).is_empty());
//! ```

use std::fmt;

use crate::condition::{ValidationCondition, WhenDefined, WhenNotNull};
use crate::error::RuleError;
use crate::failure::ValidationFailure;
use crate::validator::PropertyValidator;
use crate::value::{Accessor, PropertyValue};

/// A validator together with the failure it reports.
///
/// The code and message are static configuration: every failure produced by
/// this validator carries the same pair.
pub struct ConfiguredValidator<V: ?Sized> {
    validator: Box<dyn PropertyValidator<V>>,
    code: Option<String>,
    message: Option<String>,
}

impl<V: ?Sized> ConfiguredValidator<V> {
    /// Wraps `validator` with no code or message.
    pub fn new<P>(validator: P) -> Self
    where
        P: PropertyValidator<V> + 'static,
    {
        Self {
            validator: Box::new(validator),
            code: None,
            message: None,
        }
    }

    /// Sets the code reported on failure.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the message reported on failure.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The configured failure code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The configured failure message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Runs the wrapped validator.
    #[inline]
    pub fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        self.validator.is_valid(input)
    }

    fn failure_for(&self, property: &str) -> ValidationFailure {
        let mut failure = ValidationFailure::new().with_target(property);
        if let Some(code) = &self.code {
            failure = failure.with_code(code.as_str());
        }
        if let Some(message) = &self.message {
            failure = failure.with_message(message.as_str());
        }
        failure
    }
}

impl<V: ?Sized> fmt::Debug for ConfiguredValidator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguredValidator")
            .field("code", &self.code)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// A rule the engine can evaluate against an owner of type `T`.
///
/// Evaluating a rule never fails: failures are returned as data, faults in
/// the property path mean the rule is skipped.
pub trait ValidationRule<T: ?Sized>: Send + Sync {
    /// Name of the property this rule checks.
    fn property(&self) -> &str;

    /// Runs the rule once against `owner`, returning one failure per
    /// rejecting validator in declaration order.
    fn evaluate(&self, owner: &T) -> Vec<ValidationFailure>;
}

impl<T: ?Sized, R: ValidationRule<T> + ?Sized> ValidationRule<T> for Box<R> {
    fn property(&self) -> &str {
        (**self).property()
    }

    fn evaluate(&self, owner: &T) -> Vec<ValidationFailure> {
        (**self).evaluate(owner)
    }
}

/// Binds a property accessor, a condition and one or more validators.
///
/// Immutable once built; safe to share across concurrent passes.
pub struct PropertyValidationRule<T: ?Sized, V> {
    property: String,
    accessor: Accessor<T, V>,
    condition: Box<dyn ValidationCondition<T>>,
    validators: Vec<ConfiguredValidator<V>>,
}

impl<T: ?Sized, V> PropertyValidationRule<T, V> {
    /// Builds a rule with an explicit condition.
    ///
    /// Returns [`RuleError::NoValidators`] when `validators` is empty.
    pub fn new<C>(
        property: impl Into<String>,
        accessor: Accessor<T, V>,
        condition: C,
        validators: Vec<ConfiguredValidator<V>>,
    ) -> Result<Self, RuleError>
    where
        C: ValidationCondition<T> + 'static,
    {
        let property = property.into();
        if validators.is_empty() {
            return Err(RuleError::no_validators(property));
        }

        Ok(Self {
            property,
            accessor,
            condition: Box::new(condition),
            validators,
        })
    }

    /// Builds a rule that runs unless the property is undefined.
    pub fn when_defined(
        property: impl Into<String>,
        accessor: Accessor<T, V>,
        validators: Vec<ConfiguredValidator<V>>,
    ) -> Result<Self, RuleError>
    where
        T: 'static,
        V: 'static,
    {
        let condition = WhenDefined::new(accessor.clone());
        Self::new(property, accessor, condition, validators)
    }

    /// Builds a rule that runs only when the property holds a value.
    pub fn when_not_null(
        property: impl Into<String>,
        accessor: Accessor<T, V>,
        validators: Vec<ConfiguredValidator<V>>,
    ) -> Result<Self, RuleError>
    where
        T: 'static,
        V: 'static,
    {
        let condition = WhenNotNull::new(accessor.clone());
        Self::new(property, accessor, condition, validators)
    }

    /// The validators bound to this rule, in declaration order.
    pub fn validators(&self) -> &[ConfiguredValidator<V>] {
        &self.validators
    }
}

impl<T: ?Sized, V> ValidationRule<T> for PropertyValidationRule<T, V> {
    fn property(&self) -> &str {
        &self.property
    }

    fn evaluate(&self, owner: &T) -> Vec<ValidationFailure> {
        let value = match self.accessor.get(owner) {
            Ok(value) => value,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    property = %self.property,
                    error = %_err,
                    "accessor failed, skipping rule"
                );
                return Vec::new();
            }
        };

        if !self.condition.should_validate(owner) {
            #[cfg(feature = "tracing")]
            tracing::trace!(property = %self.property, "condition not met, skipping rule");
            return Vec::new();
        }

        self.validators
            .iter()
            .filter(|validator| !validator.is_valid(value.as_ref()))
            .map(|validator| {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    property = %self.property,
                    code = validator.code(),
                    "validator rejected value"
                );
                validator.failure_for(&self.property)
            })
            .collect()
    }
}

impl<T: ?Sized, V> fmt::Debug for PropertyValidationRule<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyValidationRule")
            .field("property", &self.property)
            .field("accessor", &self.accessor)
            .field("validators", &self.validators)
            .finish_non_exhaustive()
    }
}
