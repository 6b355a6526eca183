//! Collection validators
//!
//! Size checks work on anything implementing [`Length`]: strings, vectors,
//! slices, deques, maps and sets.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::validator::PropertyValidator;
use crate::value::PropertyValue;

/// A value with a number of elements.
///
/// Strings count bytes, matching [`str::len`].
pub trait Length {
    /// Number of elements in the value.
    fn length(&self) -> usize;
}

impl Length for str {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl Length for String {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for [T] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for Vec<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for VecDeque<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> Length for HashSet<T, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Length for BTreeMap<K, V> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for BTreeSet<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

#[inline]
fn defined_length<C: Length + ?Sized>(input: PropertyValue<&C>) -> Option<usize> {
    input.into_option().map(|value| value.length())
}

/// Validator that checks a collection is empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsEmpty;

impl<C: Length + ?Sized> PropertyValidator<C> for IsEmpty {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&C>) -> bool {
        defined_length(input) == Some(0)
    }
}

/// Create a validator that checks a collection is empty.
///
/// Undefined and null are not empty collections and fail.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(is_empty().is_valid(PropertyValue::Defined(&Vec::<i32>::new())));
/// assert!(!is_empty().is_valid(PropertyValue::Defined(&vec![1])));
/// assert!(!is_empty().is_valid(PropertyValue::<&Vec<i32>>::Undefined));
/// ```
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

/// Validator that checks a collection has at least one element.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNotEmpty;

impl<C: Length + ?Sized> PropertyValidator<C> for IsNotEmpty {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&C>) -> bool {
        defined_length(input).is_some_and(|len| len > 0)
    }
}

/// Create a validator that checks a collection or string is not empty.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(is_not_empty().is_valid(PropertyValue::Defined("ok")));
/// assert!(!is_not_empty().is_valid(PropertyValue::Defined("")));
/// assert!(!is_not_empty().is_valid(PropertyValue::<&str>::Null));
/// ```
pub fn is_not_empty() -> IsNotEmpty {
    IsNotEmpty
}

/// Validator that checks the exact number of elements.
#[derive(Clone, Copy, Debug)]
pub struct HasNumberOfElements {
    expected: usize,
}

impl<C: Length + ?Sized> PropertyValidator<C> for HasNumberOfElements {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&C>) -> bool {
        defined_length(input) == Some(self.expected)
    }
}

/// Create a validator that checks a collection has exactly `expected` elements.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(has_number_of_elements(3).is_valid(PropertyValue::Defined(&vec![1, 2, 3])));
/// assert!(!has_number_of_elements(3).is_valid(PropertyValue::Defined(&vec![1, 2])));
/// ```
pub fn has_number_of_elements(expected: usize) -> HasNumberOfElements {
    HasNumberOfElements { expected }
}

/// Validator that checks a minimum number of elements.
#[derive(Clone, Copy, Debug)]
pub struct HasMinNumberOfElements {
    min: usize,
}

impl<C: Length + ?Sized> PropertyValidator<C> for HasMinNumberOfElements {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&C>) -> bool {
        defined_length(input).is_some_and(|len| len >= self.min)
    }
}

/// Create a validator that checks a collection has at least `min` elements.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(has_min_number_of_elements(2).is_valid(PropertyValue::Defined(&vec![1, 2])));
/// assert!(!has_min_number_of_elements(2).is_valid(PropertyValue::Defined(&vec![1])));
/// ```
pub fn has_min_number_of_elements(min: usize) -> HasMinNumberOfElements {
    HasMinNumberOfElements { min }
}

/// Validator that checks a maximum number of elements.
#[derive(Clone, Copy, Debug)]
pub struct HasMaxNumberOfElements {
    max: usize,
}

impl<C: Length + ?Sized> PropertyValidator<C> for HasMaxNumberOfElements {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&C>) -> bool {
        defined_length(input).is_some_and(|len| len <= self.max)
    }
}

/// Create a validator that checks a collection has at most `max` elements.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(has_max_number_of_elements(2).is_valid(PropertyValue::Defined(&vec![1, 2])));
/// assert!(!has_max_number_of_elements(2).is_valid(PropertyValue::Defined(&vec![1, 2, 3])));
/// ```
pub fn has_max_number_of_elements(max: usize) -> HasMaxNumberOfElements {
    HasMaxNumberOfElements { max }
}
