//! Catalogue of atomic validators
//!
//! Each validator is a small struct implementing
//! [`PropertyValidator`](crate::PropertyValidator), created through a function
//! named after the check. Apart from the presence checks in [`common`], every
//! validator fails on undefined or null input.
//!
//! # Example
//!
//! ```rust
//! use tollgate::validators::*;
//! use tollgate::{PropertyValidator, PropertyValidatorExt, PropertyValue};
//!
//! let port = is_between(1, 65535).and(is_not_equal_to(22));
//! assert!(port.is_valid(PropertyValue::Defined(&8080)));
//! assert!(!port.is_valid(PropertyValue::Defined(&22)));
//! assert!(!port.is_valid(PropertyValue::Undefined));
//! ```

pub mod collection;
pub mod common;
pub mod date;
pub mod number;
pub mod string;

pub use collection::{
    has_max_number_of_elements, has_min_number_of_elements, has_number_of_elements, is_empty,
    is_not_empty, HasMaxNumberOfElements, HasMinNumberOfElements, HasNumberOfElements, IsEmpty,
    IsNotEmpty, Length,
};

pub use common::{
    is_defined, is_equal_to, is_in, is_not_equal_to, is_not_null, is_null, IsDefined, IsEqualTo,
    IsIn, IsNotEqualTo, IsNotNull, IsNull,
};

pub use date::{is_after, is_before, IsAfter, IsBefore};

pub use number::{
    is_between, is_greater_than, is_greater_than_or_equal, is_less_than, is_less_than_or_equal,
    is_negative, is_positive, IsBetween, IsGreaterThan, IsGreaterThanOrEqual, IsLessThan,
    IsLessThanOrEqual,
};

pub use string::{
    contains, is_boolean_string, is_lowercase, is_numeric_string, is_uppercase, matches,
    Contains, IsBooleanString, IsLowercase, IsNumericString, IsUppercase, Matches,
};
