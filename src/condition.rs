//! Conditions deciding whether a rule runs at all
//!
//! A condition looks at the owning object and answers one question: is there
//! anything to validate here? [`WhenDefined`] and [`WhenNotNull`] answer it by
//! reading the property through an [`Accessor`]; any closure `Fn(&T) -> bool`
//! is a condition too.
//!
//! When the accessor itself fails (a missing intermediate object, or any other
//! [`AccessError`](crate::AccessError)) both variants answer `false`: the rule
//! is skipped, never reported as a failure.
//!
//! # Examples
//!
//! ```
//! use tollgate::{Accessor, PropertyValue, ValidationCondition, WhenDefined, WhenNotNull};
//!
//! struct Form {
//!     comment: PropertyValue<String>,
//! }
//!
//! let comment = Accessor::new(|f: &Form| Ok(f.comment.clone()));
//! let when_defined = WhenDefined::new(comment.clone());
//! let when_not_null = WhenNotNull::new(comment);
//!
//! let cleared = Form { comment: PropertyValue::Null };
//! assert!(when_defined.should_validate(&cleared));
//! assert!(!when_not_null.should_validate(&cleared));
//! ```

use std::fmt;

use crate::value::{AccessResult, Accessor, PropertyValue};

/// Decides whether a rule's validators run against a given owner.
pub trait ValidationCondition<T: ?Sized>: Send + Sync {
    /// Returns `true` if validation should proceed for `owner`.
    fn should_validate(&self, owner: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> ValidationCondition<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn should_validate(&self, owner: &T) -> bool {
        self(owner)
    }
}

// Shared by both variants: a faulting accessor means "skip".
fn accessed<V>(result: AccessResult<V>, condition: &'static str) -> Option<PropertyValue<V>> {
    match result {
        Ok(value) => Some(value),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(condition, error = %_err, "accessor failed, skipping validation");
            #[cfg(not(feature = "tracing"))]
            let _ = condition;
            None
        }
    }
}

/// Runs validation unless the property is undefined.
///
/// Null and empty values still count as defined.
pub struct WhenDefined<T: ?Sized, V> {
    accessor: Accessor<T, V>,
}

impl<T: ?Sized, V> WhenDefined<T, V> {
    /// Creates the condition over `accessor`.
    pub fn new(accessor: Accessor<T, V>) -> Self {
        Self { accessor }
    }

    /// Returns the wrapped accessor.
    pub fn accessor(&self) -> &Accessor<T, V> {
        &self.accessor
    }
}

impl<T: ?Sized, V> ValidationCondition<T> for WhenDefined<T, V> {
    fn should_validate(&self, owner: &T) -> bool {
        accessed(self.accessor.get(owner), "when_defined")
            .is_some_and(|value| !value.is_undefined())
    }
}

impl<T: ?Sized, V> Clone for WhenDefined<T, V> {
    fn clone(&self) -> Self {
        Self {
            accessor: self.accessor.clone(),
        }
    }
}

impl<T: ?Sized, V> fmt::Debug for WhenDefined<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhenDefined")
            .field("accessor", &self.accessor)
            .finish()
    }
}

/// Runs validation only if the property holds a value.
///
/// Both undefined and null skip validation. Empty values still run it.
pub struct WhenNotNull<T: ?Sized, V> {
    accessor: Accessor<T, V>,
}

impl<T: ?Sized, V> WhenNotNull<T, V> {
    /// Creates the condition over `accessor`.
    pub fn new(accessor: Accessor<T, V>) -> Self {
        Self { accessor }
    }

    /// Returns the wrapped accessor.
    pub fn accessor(&self) -> &Accessor<T, V> {
        &self.accessor
    }
}

impl<T: ?Sized, V> ValidationCondition<T> for WhenNotNull<T, V> {
    fn should_validate(&self, owner: &T) -> bool {
        accessed(self.accessor.get(owner), "when_not_null")
            .is_some_and(|value| value.is_defined())
    }
}

impl<T: ?Sized, V> Clone for WhenNotNull<T, V> {
    fn clone(&self) -> Self {
        Self {
            accessor: self.accessor.clone(),
        }
    }
}

impl<T: ?Sized, V> fmt::Debug for WhenNotNull<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhenNotNull")
            .field("accessor", &self.accessor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AccessError, AccessExt};

    #[derive(Default)]
    struct InnerClass {
        property: Option<String>,
    }

    #[derive(Default)]
    struct TestClass {
        property: PropertyValue<String>,
        inner_prop: Option<InnerClass>,
    }

    fn property() -> Accessor<TestClass, String> {
        Accessor::new(|t: &TestClass| Ok(t.property.clone()))
    }

    fn inner_property() -> Accessor<TestClass, String> {
        Accessor::new(|t: &TestClass| {
            Ok(t.inner_prop
                .as_ref()
                .or_missing("inner_prop")?
                .property
                .clone()
                .into())
        })
    }

    fn with_property(value: PropertyValue<String>) -> TestClass {
        TestClass {
            property: value,
            ..TestClass::default()
        }
    }

    mod when_defined {
        use super::*;

        #[test]
        fn true_if_property_has_a_value() {
            let condition = WhenDefined::new(property());
            let subject = with_property(PropertyValue::Defined("foo".to_string()));
            assert!(condition.should_validate(&subject));
        }

        #[test]
        fn true_if_property_has_an_empty_value() {
            let condition = WhenDefined::new(property());
            let subject = with_property(PropertyValue::Defined(String::new()));
            assert!(condition.should_validate(&subject));
        }

        #[test]
        fn true_if_property_is_null() {
            let condition = WhenDefined::new(property());
            let subject = with_property(PropertyValue::Null);
            assert!(condition.should_validate(&subject));
        }

        #[test]
        fn false_if_property_is_undefined() {
            let condition = WhenDefined::new(property());
            assert!(!condition.should_validate(&TestClass::default()));
        }

        #[test]
        fn false_if_accessor_fails() {
            let condition = WhenDefined::new(inner_property());
            assert!(!condition.should_validate(&TestClass::default()));
        }

        #[test]
        fn nested_property_is_read_when_present() {
            let condition = WhenDefined::new(inner_property());
            let subject = TestClass {
                inner_prop: Some(InnerClass {
                    property: Some("bar".to_string()),
                }),
                ..TestClass::default()
            };
            assert!(condition.should_validate(&subject));
        }
    }

    mod when_not_null {
        use super::*;

        #[test]
        fn true_if_property_has_a_value() {
            let condition = WhenNotNull::new(property());
            let subject = with_property(PropertyValue::Defined("foo".to_string()));
            assert!(condition.should_validate(&subject));
        }

        #[test]
        fn true_if_property_has_an_empty_value() {
            let condition = WhenNotNull::new(property());
            let subject = with_property(PropertyValue::Defined(String::new()));
            assert!(condition.should_validate(&subject));
        }

        #[test]
        fn false_if_property_is_null() {
            let condition = WhenNotNull::new(property());
            let subject = with_property(PropertyValue::Null);
            assert!(!condition.should_validate(&subject));
        }

        #[test]
        fn false_if_property_is_undefined() {
            let condition = WhenNotNull::new(property());
            assert!(!condition.should_validate(&TestClass::default()));
        }

        #[test]
        fn false_if_accessor_fails() {
            let condition = WhenNotNull::new(inner_property());
            assert!(!condition.should_validate(&TestClass::default()));
        }
    }

    #[test]
    fn every_access_error_kind_is_suppressed() {
        let failing: Accessor<TestClass, String> =
            Accessor::new(|_: &TestClass| Err(AccessError::failed("index out of range")));

        assert!(!WhenDefined::new(failing.clone()).should_validate(&TestClass::default()));
        assert!(!WhenNotNull::new(failing).should_validate(&TestClass::default()));
    }

    #[test]
    fn closures_are_conditions() {
        fn run<C: ValidationCondition<TestClass>>(c: &C, owner: &TestClass) -> bool {
            c.should_validate(owner)
        }

        let has_inner = |t: &TestClass| t.inner_prop.is_some();
        assert!(!run(&has_inner, &TestClass::default()));
    }

    #[test]
    fn debug_hides_accessor_function() {
        let condition = WhenNotNull::new(property());
        assert_eq!(
            format!("{:?}", condition),
            "WhenNotNull { accessor: Accessor { get: \"<function>\" } }"
        );
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[test]
        #[traced_test]
        fn suppressed_fault_is_logged() {
            let condition = WhenDefined::new(inner_property());
            assert!(!condition.should_validate(&TestClass::default()));
            assert!(logs_contain("accessor failed, skipping validation"));
            assert!(logs_contain("inner_prop"));
        }
    }
}
