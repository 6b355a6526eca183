//! Date validators
//!
//! Generic over any ordered point in time (`chrono` dates, `SystemTime`,
//! Unix timestamps). Both comparisons are strict.

use crate::validator::PropertyValidator;
use crate::value::PropertyValue;

/// Validator that checks a date is before a reference date.
#[derive(Clone, Copy, Debug)]
pub struct IsBefore<D>(pub D);

impl<D: PartialOrd + Send + Sync> PropertyValidator<D> for IsBefore<D> {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&D>) -> bool {
        input.as_option().is_some_and(|date| **date < self.0)
    }
}

/// Create a validator that checks the date is strictly before `date`.
///
/// # Example
///
/// ```rust
/// use std::time::{Duration, SystemTime};
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// let now = SystemTime::now();
/// let earlier = now - Duration::from_secs(60);
///
/// assert!(is_before(now).is_valid(PropertyValue::Defined(&earlier)));
/// assert!(!is_before(now).is_valid(PropertyValue::Defined(&now)));
/// ```
pub fn is_before<D: PartialOrd + Send + Sync>(date: D) -> IsBefore<D> {
    IsBefore(date)
}

/// Validator that checks a date is after a reference date.
#[derive(Clone, Copy, Debug)]
pub struct IsAfter<D>(pub D);

impl<D: PartialOrd + Send + Sync> PropertyValidator<D> for IsAfter<D> {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&D>) -> bool {
        input.as_option().is_some_and(|date| **date > self.0)
    }
}

/// Create a validator that checks the date is strictly after `date`.
///
/// # Example
///
/// ```rust
/// use std::time::{Duration, SystemTime};
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// let now = SystemTime::now();
/// let later = now + Duration::from_secs(60);
///
/// assert!(is_after(now).is_valid(PropertyValue::Defined(&later)));
/// assert!(!is_after(now).is_valid(PropertyValue::Defined(&now)));
/// ```
pub fn is_after<D: PartialOrd + Send + Sync>(date: D) -> IsAfter<D> {
    IsAfter(date)
}
