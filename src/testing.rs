//! Testing utilities for code that declares validation rules
//!
//! Assertion macros over [`ValidationResult`](crate::ValidationResult) and,
//! behind the `proptest` feature, `Arbitrary`
//! implementations for generating failures and property values.
//!
//! # Examples
//!
//! ```rust
//! use tollgate::{assert_failure_codes, assert_invalid, assert_valid};
//! use tollgate::{ValidationFailure, ValidationResult};
//!
//! let valid = ValidationResult::new();
//! assert_valid!(valid);
//!
//! let mut invalid = ValidationResult::new();
//! invalid.add_failure(ValidationFailure::new().with_code("E1"));
//! assert_invalid!(invalid);
//! assert_failure_codes!(invalid, ["E1"]);
//! ```

/// Assert that a validation result holds no failure.
///
/// Panics with the recorded failures otherwise.
///
/// # Example
///
/// ```rust
/// use tollgate::{assert_valid, ValidationResult};
///
/// assert_valid!(ValidationResult::new());
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {{
        let result = &$result;
        if $crate::ValidationResult::is_invalid(result) {
            panic!(
                "Expected valid result, got failures: {:?}",
                $crate::ValidationResult::failures(result)
            );
        }
    }};
}

/// Assert that a validation result holds at least one failure.
///
/// # Example
///
/// ```rust
/// use tollgate::{assert_invalid, ValidationFailure, ValidationResult};
///
/// let mut result = ValidationResult::new();
/// result.add_failure(ValidationFailure::new());
/// assert_invalid!(result);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {
        if $crate::ValidationResult::is_valid(&$result) {
            panic!("Expected invalid result, got no failures");
        }
    };
}

/// Assert the failure messages of a result, in order.
///
/// Failures without a message are not listed.
///
/// # Example
///
/// ```rust
/// use tollgate::{assert_failure_messages, ValidationFailure, ValidationResult};
///
/// let mut result = ValidationResult::new();
/// result.add_failure(ValidationFailure::new().with_message("too short"));
/// assert_failure_messages!(result, ["too short"]);
/// ```
#[macro_export]
macro_rules! assert_failure_messages {
    ($result:expr, [$($expected:expr),* $(,)?]) => {{
        let expected: ::std::vec::Vec<&str> = ::std::vec![$($expected),*];
        assert_eq!(
            $crate::ValidationResult::failure_messages(&$result),
            expected,
            "failure messages differ"
        );
    }};
}

/// Assert the failure codes of a result, in order.
///
/// Failures without a code are not listed.
///
/// # Example
///
/// ```rust
/// use tollgate::{assert_failure_codes, ValidationFailure, ValidationResult};
///
/// let mut result = ValidationResult::new();
/// result.add_failure(ValidationFailure::new().with_code("LEN"));
/// result.add_failure(ValidationFailure::new().with_message("no code"));
/// assert_failure_codes!(result, ["LEN"]);
/// ```
#[macro_export]
macro_rules! assert_failure_codes {
    ($result:expr, [$($expected:expr),* $(,)?]) => {{
        let expected: ::std::vec::Vec<&str> = ::std::vec![$($expected),*];
        assert_eq!(
            $crate::ValidationResult::failure_codes(&$result),
            expected,
            "failure codes differ"
        );
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{PropertyValue, ValidationFailure};

#[cfg(feature = "proptest")]
impl Arbitrary for ValidationFailure {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (
            proptest::option::of("[A-Z_]{1,12}"),
            proptest::option::of("[a-z ]{1,24}"),
            proptest::option::of("[a-z_.]{1,16}"),
        )
            .prop_map(|(code, message, target)| {
                let mut failure = ValidationFailure::new();
                if let Some(code) = code {
                    failure = failure.with_code(code);
                }
                if let Some(message) = message {
                    failure = failure.with_message(message);
                }
                if let Some(target) = target {
                    failure = failure.with_target(target);
                }
                failure
            })
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<V> Arbitrary for PropertyValue<V>
where
    V: Arbitrary + Clone + 'static,
{
    type Parameters = V::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(PropertyValue::Undefined),
            Just(PropertyValue::Null),
            any_with::<V>(args).prop_map(PropertyValue::Defined),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ValidationFailure, ValidationResult};

    fn invalid() -> ValidationResult {
        let mut result = ValidationResult::new();
        result.add_failures(vec![
            ValidationFailure::new().with_code("A").with_message("first"),
            ValidationFailure::new().with_message("second"),
        ]);
        result
    }

    #[test]
    fn assert_valid_macro() {
        assert_valid!(ValidationResult::new());
    }

    #[test]
    #[should_panic(expected = "Expected valid result")]
    fn assert_valid_macro_panics() {
        assert_valid!(invalid());
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(invalid());
    }

    #[test]
    #[should_panic(expected = "Expected invalid result")]
    fn assert_invalid_macro_panics() {
        assert_invalid!(ValidationResult::new());
    }

    #[test]
    fn assert_failure_messages_macro() {
        assert_failure_messages!(invalid(), ["first", "second"]);
        assert_failure_messages!(ValidationResult::new(), []);
    }

    #[test]
    #[should_panic(expected = "failure messages differ")]
    fn assert_failure_messages_macro_panics_on_order() {
        assert_failure_messages!(invalid(), ["second", "first"]);
    }

    #[test]
    fn assert_failure_codes_macro() {
        assert_failure_codes!(invalid(), ["A"]);
    }

    #[test]
    #[should_panic(expected = "failure codes differ")]
    fn assert_failure_codes_macro_panics() {
        assert_failure_codes!(invalid(), ["B"]);
    }

    #[cfg(feature = "proptest")]
    mod arbitrary {
        use crate::{PropertyValue, ValidationFailure, ValidationResult};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn generated_failures_invalidate_a_result(
                failures in prop::collection::vec(any::<ValidationFailure>(), 1..8)
            ) {
                let mut result = ValidationResult::new();
                result.add_failures(failures.clone());
                prop_assert!(result.is_invalid());
                prop_assert_eq!(result.failures(), failures);
            }

            #[test]
            fn generated_values_have_one_state(value in any::<PropertyValue<i32>>()) {
                let states = [value.is_undefined(), value.is_null(), value.is_defined()];
                prop_assert_eq!(states.iter().filter(|s| **s).count(), 1);
            }
        }
    }
}
