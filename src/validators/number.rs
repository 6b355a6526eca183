//! Number validators
//!
//! All comparisons are generic over `PartialOrd`; a value that does not compare
//! (such as `NaN`) fails every check.

use std::cmp::PartialOrd;

use crate::validator::PropertyValidator;
use crate::value::PropertyValue;

/// Validator for greater than.
#[derive(Clone, Copy, Debug)]
pub struct IsGreaterThan<T>(pub T);

impl<T: PartialOrd + Send + Sync> PropertyValidator<T> for IsGreaterThan<T> {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&T>) -> bool {
        input.as_option().is_some_and(|value| **value > self.0)
    }
}

/// Create a validator that checks the value is greater than `bound`.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(is_greater_than(5).is_valid(PropertyValue::Defined(&6)));
/// assert!(!is_greater_than(5).is_valid(PropertyValue::Defined(&5)));
/// ```
pub fn is_greater_than<T: PartialOrd + Send + Sync>(bound: T) -> IsGreaterThan<T> {
    IsGreaterThan(bound)
}

/// Validator for greater than or equal.
#[derive(Clone, Copy, Debug)]
pub struct IsGreaterThanOrEqual<T>(pub T);

impl<T: PartialOrd + Send + Sync> PropertyValidator<T> for IsGreaterThanOrEqual<T> {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&T>) -> bool {
        input.as_option().is_some_and(|value| **value >= self.0)
    }
}

/// Create a validator that checks the value is at least `bound`.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(is_greater_than_or_equal(5).is_valid(PropertyValue::Defined(&5)));
/// assert!(!is_greater_than_or_equal(5).is_valid(PropertyValue::Defined(&4)));
/// ```
pub fn is_greater_than_or_equal<T: PartialOrd + Send + Sync>(bound: T) -> IsGreaterThanOrEqual<T> {
    IsGreaterThanOrEqual(bound)
}

/// Validator for less than.
#[derive(Clone, Copy, Debug)]
pub struct IsLessThan<T>(pub T);

impl<T: PartialOrd + Send + Sync> PropertyValidator<T> for IsLessThan<T> {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&T>) -> bool {
        input.as_option().is_some_and(|value| **value < self.0)
    }
}

/// Create a validator that checks the value is less than `bound`.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(is_less_than(5).is_valid(PropertyValue::Defined(&4)));
/// assert!(!is_less_than(5).is_valid(PropertyValue::Defined(&5)));
/// ```
pub fn is_less_than<T: PartialOrd + Send + Sync>(bound: T) -> IsLessThan<T> {
    IsLessThan(bound)
}

/// Validator for less than or equal.
#[derive(Clone, Copy, Debug)]
pub struct IsLessThanOrEqual<T>(pub T);

impl<T: PartialOrd + Send + Sync> PropertyValidator<T> for IsLessThanOrEqual<T> {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&T>) -> bool {
        input.as_option().is_some_and(|value| **value <= self.0)
    }
}

/// Create a validator that checks the value is at most `bound`.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(is_less_than_or_equal(5).is_valid(PropertyValue::Defined(&5)));
/// assert!(!is_less_than_or_equal(5).is_valid(PropertyValue::Defined(&6)));
/// ```
pub fn is_less_than_or_equal<T: PartialOrd + Send + Sync>(bound: T) -> IsLessThanOrEqual<T> {
    IsLessThanOrEqual(bound)
}

/// Validator for an inclusive range.
#[derive(Clone, Copy, Debug)]
pub struct IsBetween<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> PropertyValidator<T> for IsBetween<T> {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&T>) -> bool {
        input
            .as_option()
            .is_some_and(|value| **value >= self.min && **value <= self.max)
    }
}

/// Create a validator that checks `min <= value <= max`.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// let v = is_between(1, 10);
/// assert!(v.is_valid(PropertyValue::Defined(&1)));
/// assert!(v.is_valid(PropertyValue::Defined(&10)));
/// assert!(!v.is_valid(PropertyValue::Defined(&11)));
/// ```
pub fn is_between<T: PartialOrd + Send + Sync>(min: T, max: T) -> IsBetween<T> {
    IsBetween { min, max }
}

/// Create a validator that checks the value is greater than zero.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// let v = is_positive::<i32>();
/// assert!(v.is_valid(PropertyValue::Defined(&1)));
/// assert!(!v.is_valid(PropertyValue::Defined(&0)));
/// ```
pub fn is_positive<T>() -> IsGreaterThan<T>
where
    T: PartialOrd + Default + Send + Sync,
{
    IsGreaterThan(T::default())
}

/// Create a validator that checks the value is less than zero.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// let v = is_negative::<f64>();
/// assert!(v.is_valid(PropertyValue::Defined(&-0.5)));
/// assert!(!v.is_valid(PropertyValue::Defined(&0.0)));
/// ```
pub fn is_negative<T>() -> IsLessThan<T>
where
    T: PartialOrd + Default + Send + Sync,
{
    IsLessThan(T::default())
}
