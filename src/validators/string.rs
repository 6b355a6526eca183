//! String validators
//!
//! Every string validator accepts any `V: AsRef<str>`, so the same check works
//! for `str`, `String` and `Cow<str>` properties.

use regex::Regex;

use crate::error::RuleError;
use crate::validator::PropertyValidator;
use crate::value::PropertyValue;

#[inline]
fn defined_str<V: AsRef<str> + ?Sized>(input: PropertyValue<&V>) -> Option<&str> {
    input.into_option().map(|value| value.as_ref())
}

/// Validator that checks a string contains a seed.
#[derive(Clone, Debug)]
pub struct Contains<S>(pub S);

impl<V, S> PropertyValidator<V> for Contains<S>
where
    V: AsRef<str> + ?Sized,
    S: AsRef<str> + Send + Sync,
{
    #[inline]
    fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        defined_str(input).is_some_and(|s| s.contains(self.0.as_ref()))
    }
}

/// Create a validator that checks a string contains `seed`.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(contains("@").is_valid(PropertyValue::Defined("user@example.com")));
/// assert!(!contains("@").is_valid(PropertyValue::Defined("user.example.com")));
/// ```
pub fn contains<S: AsRef<str> + Send + Sync>(seed: S) -> Contains<S> {
    Contains(seed)
}

/// Validator that checks a string against a regular expression.
#[derive(Clone, Debug)]
pub struct Matches {
    regex: Regex,
}

impl Matches {
    /// Wraps an already compiled expression.
    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }

    /// The expression this validator applies.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl<V: AsRef<str> + ?Sized> PropertyValidator<V> for Matches {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        defined_str(input).is_some_and(|s| self.regex.is_match(s))
    }
}

/// Create a validator that checks a string matches `pattern`.
///
/// A pattern that does not compile is a configuration fault and is reported
/// here, before any rule runs.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// let zip = matches(r"^\d{5}$").unwrap();
/// assert!(zip.is_valid(PropertyValue::Defined("12345")));
/// assert!(!zip.is_valid(PropertyValue::Defined("1234")));
///
/// assert!(matches("(unclosed").is_err());
/// ```
pub fn matches(pattern: &str) -> Result<Matches, RuleError> {
    Regex::new(pattern)
        .map(Matches::from_regex)
        .map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Validator that checks a string is a plain decimal number.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNumericString;

impl<V: AsRef<str> + ?Sized> PropertyValidator<V> for IsNumericString {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        defined_str(input).is_some_and(is_numeric)
    }
}

// Optional sign, optional integer part and dot, mandatory digits.
fn is_numeric(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or(("", unsigned));

    integer.bytes().all(|b| b.is_ascii_digit())
        && !fraction.is_empty()
        && fraction.bytes().all(|b| b.is_ascii_digit())
}

/// Create a validator that checks a string holds a decimal number.
///
/// Accepts an optional `+`/`-` sign and an optional fractional part; the
/// string must end with at least one digit.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(is_numeric_string().is_valid(PropertyValue::Defined("-42")));
/// assert!(is_numeric_string().is_valid(PropertyValue::Defined(".5")));
/// assert!(!is_numeric_string().is_valid(PropertyValue::Defined("5.")));
/// assert!(!is_numeric_string().is_valid(PropertyValue::Defined("")));
/// ```
pub fn is_numeric_string() -> IsNumericString {
    IsNumericString
}

/// Validator that checks a string spells a boolean.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsBooleanString;

impl<V: AsRef<str> + ?Sized> PropertyValidator<V> for IsBooleanString {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        defined_str(input).is_some_and(|s| matches!(s, "true" | "false" | "1" | "0"))
    }
}

/// Create a validator that accepts `"true"`, `"false"`, `"1"` and `"0"`.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(is_boolean_string().is_valid(PropertyValue::Defined("false")));
/// assert!(!is_boolean_string().is_valid(PropertyValue::Defined("yes")));
/// assert!(!is_boolean_string().is_valid(PropertyValue::<&str>::Null));
/// ```
pub fn is_boolean_string() -> IsBooleanString {
    IsBooleanString
}

/// Validator that checks a string has no uppercase characters.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsLowercase;

impl<V: AsRef<str> + ?Sized> PropertyValidator<V> for IsLowercase {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        defined_str(input).is_some_and(|s| s.to_lowercase() == s)
    }
}

/// Create a validator that checks a string is unchanged by lowercasing.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(is_lowercase().is_valid(PropertyValue::Defined("abc-1")));
/// assert!(!is_lowercase().is_valid(PropertyValue::Defined("Abc")));
/// ```
pub fn is_lowercase() -> IsLowercase {
    IsLowercase
}

/// Validator that checks a string has no lowercase characters.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsUppercase;

impl<V: AsRef<str> + ?Sized> PropertyValidator<V> for IsUppercase {
    #[inline]
    fn is_valid(&self, input: PropertyValue<&V>) -> bool {
        defined_str(input).is_some_and(|s| s.to_uppercase() == s)
    }
}

/// Create a validator that checks a string is unchanged by uppercasing.
///
/// # Example
///
/// ```rust
/// use tollgate::validators::*;
/// use tollgate::{PropertyValidator, PropertyValue};
///
/// assert!(is_uppercase().is_valid(PropertyValue::Defined("ABC-1")));
/// assert!(!is_uppercase().is_valid(PropertyValue::Defined("aBC")));
/// ```
pub fn is_uppercase() -> IsUppercase {
    IsUppercase
}
