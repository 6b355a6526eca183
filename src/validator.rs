//! The validator contract and its logical combinators
//!
//! Every atomic check implements [`PropertyValidator`]. Checks receive the
//! extracted [`PropertyValue`], so an undefined or null property is an ordinary
//! input rather than a fault.
//!
//! # Example
//!
//! ```rust
//! use tollgate::validator::*;
//! use tollgate::validators::{has_min_number_of_elements, is_not_empty};
//! use tollgate::PropertyValue;
//!
//! // Validators generic over their input compose through the combinator
//! // structs; the input type is fixed where the result is used.
//! let tags = And(is_not_empty(), has_min_number_of_elements(2));
//! let value = vec!["a".to_string(), "b".to_string()];
//!
//! assert!(PropertyValidator::<Vec<String>>::is_valid(&tags, PropertyValue::Defined(&value)));
//! assert!(!PropertyValidator::<Vec<String>>::is_valid(&tags, PropertyValue::Undefined));
//! ```

use std::marker::PhantomData;

use crate::value::PropertyValue;

/// A pure predicate over one extracted property value.
///
/// Implementations must be deterministic, side-effect free and must not
/// panic: an undefined or null input is answered with `false` unless the check
/// is about absence itself.
pub trait PropertyValidator<V: ?Sized>: Send + Sync {
    /// Returns `true` if `input` satisfies this check.
    fn is_valid(&self, input: PropertyValue<&V>) -> bool;
}

// Blanket impl for closures
impl<V: ?Sized, F> PropertyValidator<V> for F
where
    F: Fn(PropertyValue<&V>) -> bool + Send + Sync,
{
    #[inline]
    fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        self(input)
    }
}

/// A validator built from a closure over the full [`PropertyValue`].
///
/// Created by [`from_fn`].
pub struct FromFn<V: ?Sized, F> {
    f: F,
    _value: PhantomData<fn(&V)>,
}

impl<V: ?Sized, F> PropertyValidator<V> for FromFn<V, F>
where
    F: Fn(PropertyValue<&V>) -> bool + Send + Sync,
{
    #[inline]
    fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        (self.f)(input)
    }
}

impl<V: ?Sized, F> std::fmt::Debug for FromFn<V, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

/// Create a validator from a closure that sees undefined and null inputs.
///
/// # Example
///
/// ```rust
/// use tollgate::validator::*;
/// use tollgate::PropertyValue;
///
/// let not_null = from_fn(|v: PropertyValue<&i32>| !v.is_null());
/// assert!(not_null.is_valid(PropertyValue::Defined(&1)));
/// assert!(!not_null.is_valid(PropertyValue::Null));
/// ```
pub fn from_fn<V: ?Sized, F>(f: F) -> FromFn<V, F>
where
    F: Fn(PropertyValue<&V>) -> bool + Send + Sync,
{
    FromFn {
        f,
        _value: PhantomData,
    }
}

/// A validator built from a predicate over a present value.
///
/// Created by [`check`]. Undefined and null inputs fail without calling the
/// predicate.
pub struct Check<V: ?Sized, F> {
    f: F,
    _value: PhantomData<fn(&V)>,
}

impl<V: ?Sized, F> PropertyValidator<V> for Check<V, F>
where
    F: Fn(&V) -> bool + Send + Sync,
{
    #[inline]
    fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        match input {
            PropertyValue::Defined(value) => (self.f)(value),
            _ => false,
        }
    }
}

impl<V: ?Sized, F> std::fmt::Debug for Check<V, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check").field("f", &"<function>").finish()
    }
}

/// Lift a predicate over present values into a validator.
///
/// # Example
///
/// ```rust
/// use tollgate::validator::*;
/// use tollgate::PropertyValue;
///
/// let even = check(|n: &u32| n % 2 == 0);
/// assert!(even.is_valid(PropertyValue::Defined(&4)));
/// assert!(!even.is_valid(PropertyValue::Defined(&3)));
/// assert!(!even.is_valid(PropertyValue::Undefined));
/// ```
pub fn check<V: ?Sized, F>(f: F) -> Check<V, F>
where
    F: Fn(&V) -> bool + Send + Sync,
{
    Check {
        f,
        _value: PhantomData,
    }
}

/// Extension trait for validator combinators.
///
/// # Example
///
/// ```rust
/// use tollgate::validator::*;
/// use tollgate::validators::{is_greater_than, is_less_than};
/// use tollgate::PropertyValue;
///
/// let percent = is_greater_than(0).and(is_less_than(100));
/// assert!(percent.is_valid(PropertyValue::Defined(&50)));
/// assert!(!percent.is_valid(PropertyValue::Defined(&100)));
/// ```
pub trait PropertyValidatorExt<V: ?Sized>: PropertyValidator<V> + Sized {
    /// Combine with AND logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tollgate::validator::*;
    /// use tollgate::validators::{is_greater_than, is_less_than};
    /// use tollgate::PropertyValue;
    ///
    /// let v = is_greater_than(0).and(is_less_than(10));
    /// assert!(v.is_valid(PropertyValue::Defined(&5)));
    /// assert!(!v.is_valid(PropertyValue::Defined(&10)));
    /// ```
    fn and<P: PropertyValidator<V>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tollgate::validator::*;
    /// use tollgate::validators::{is_greater_than, is_less_than};
    /// use tollgate::PropertyValue;
    ///
    /// let outside = is_less_than(0).or(is_greater_than(100));
    /// assert!(outside.is_valid(PropertyValue::Defined(&-1)));
    /// assert!(!outside.is_valid(PropertyValue::Defined(&50)));
    /// ```
    fn or<P: PropertyValidator<V>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the validator.
    ///
    /// Inversion applies to absent input too: a check that rejects undefined
    /// values accepts them once negated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tollgate::validator::*;
    /// use tollgate::validators::is_positive;
    /// use tollgate::PropertyValue;
    ///
    /// let v = is_positive::<i32>().not();
    /// assert!(v.is_valid(PropertyValue::Defined(&-5)));
    /// assert!(!v.is_valid(PropertyValue::Defined(&5)));
    /// assert!(v.is_valid(PropertyValue::Undefined));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<V: ?Sized, P: PropertyValidator<V>> PropertyValidatorExt<V> for P {}

/// AND combinator - both validators must accept.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<V: ?Sized, P1: PropertyValidator<V>, P2: PropertyValidator<V>> PropertyValidator<V>
    for And<P1, P2>
{
    #[inline]
    fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        self.0.is_valid(input) && self.1.is_valid(input)
    }
}

/// OR combinator - either validator must accept.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<V: ?Sized, P1: PropertyValidator<V>, P2: PropertyValidator<V>> PropertyValidator<V>
    for Or<P1, P2>
{
    #[inline]
    fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        self.0.is_valid(input) || self.1.is_valid(input)
    }
}

/// NOT combinator - inverts the validator.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<V: ?Sized, P: PropertyValidator<V>> PropertyValidator<V> for Not<P> {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        !self.0.is_valid(input)
    }
}
