//! Presence and equality validators
//!
//! The presence checks are the only validators that accept absent input:
//! they exist to make statements about absence.

use crate::validator::PropertyValidator;
use crate::value::PropertyValue;

/// Validator that accepts anything but an undefined property.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsDefined;

impl<V: ?Sized> PropertyValidator<V> for IsDefined {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        !input.is_undefined()
    }
}

/// Create a validator that fails only for undefined properties.
///
/// An explicit null counts as defined.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(is_defined().is_valid(PropertyValue::Defined("x")));
/// assert!(is_defined().is_valid(PropertyValue::<&str>::Null));
/// assert!(!is_defined().is_valid(PropertyValue::<&str>::Undefined));
/// ```
pub fn is_defined() -> IsDefined {
    IsDefined
}

/// Validator that accepts only an explicit null.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNull;

impl<V: ?Sized> PropertyValidator<V> for IsNull {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        input.is_null()
    }
}

/// Create a validator that passes only for null properties.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(is_null().is_valid(PropertyValue::<&i32>::Null));
/// assert!(!is_null().is_valid(PropertyValue::Defined(&1)));
/// assert!(!is_null().is_valid(PropertyValue::<&i32>::Undefined));
/// ```
pub fn is_null() -> IsNull {
    IsNull
}

/// Validator that rejects an explicit null.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNotNull;

impl<V: ?Sized> PropertyValidator<V> for IsNotNull {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        !input.is_null()
    }
}

/// Create a validator that fails only for null properties.
///
/// An undefined property is not null and passes; pair the rule with a
/// not-null condition or [`is_defined`] when both must be rejected.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(is_not_null().is_valid(PropertyValue::Defined(&1)));
/// assert!(is_not_null().is_valid(PropertyValue::<&i32>::Undefined));
/// assert!(!is_not_null().is_valid(PropertyValue::<&i32>::Null));
/// ```
pub fn is_not_null() -> IsNotNull {
    IsNotNull
}

/// Validator for equality with a fixed value.
#[derive(Clone, Copy, Debug)]
pub struct IsEqualTo<T>(pub T);

impl<T: PartialEq + Send + Sync> PropertyValidator<T> for IsEqualTo<T> {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&T>) -> bool {
        input.as_option().is_some_and(|value| **value == self.0)
    }
}

/// Create a validator that checks for equality.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(is_equal_to(5).is_valid(PropertyValue::Defined(&5)));
/// assert!(!is_equal_to(5).is_valid(PropertyValue::Defined(&4)));
/// ```
pub fn is_equal_to<T: PartialEq + Send + Sync>(value: T) -> IsEqualTo<T> {
    IsEqualTo(value)
}

/// Validator for inequality with a fixed value.
#[derive(Clone, Copy, Debug)]
pub struct IsNotEqualTo<T>(pub T);

impl<T: PartialEq + Send + Sync> PropertyValidator<T> for IsNotEqualTo<T> {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&T>) -> bool {
        input.as_option().is_some_and(|value| **value != self.0)
    }
}

/// Create a validator that checks for inequality.
///
/// Absent input fails: there is no value to compare.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(is_not_equal_to(5).is_valid(PropertyValue::Defined(&4)));
/// assert!(!is_not_equal_to(5).is_valid(PropertyValue::Defined(&5)));
/// assert!(!is_not_equal_to(5).is_valid(PropertyValue::Null));
/// ```
pub fn is_not_equal_to<T: PartialEq + Send + Sync>(value: T) -> IsNotEqualTo<T> {
    IsNotEqualTo(value)
}

/// Validator for membership in a fixed set of values.
#[derive(Clone, Debug)]
pub struct IsIn<T> {
    allowed: Vec<T>,
}

impl<T: PartialEq + Send + Sync> PropertyValidator<T> for IsIn<T> {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&T>) -> bool {
        input
            .as_option()
            .is_some_and(|value| self.allowed.contains(*value))
    }
}

/// Create a validator that checks the value is one of `allowed`.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// let status = is_in(vec!["draft", "published"]);
/// assert!(status.is_valid(PropertyValue::Defined(&"draft")));
/// assert!(!status.is_valid(PropertyValue::Defined(&"deleted")));
/// ```
pub fn is_in<T, I>(allowed: I) -> IsIn<T>
where
    T: PartialEq + Send + Sync,
    I: IntoIterator<Item = T>,
{
    IsIn {
        allowed: allowed.into_iter().collect(),
    }
}
