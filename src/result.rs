//! Accumulated outcome of one validation pass
//!
//! A [`ValidationResult`] starts empty, is filled by the engine in rule
//! declaration order, and is only read afterwards.
//!
//! # Examples
//!
//! ```
//! use tollgate::{ValidationFailure, ValidationResult};
//!
//! let mut result = ValidationResult::new();
//! assert!(result.is_valid());
//!
//! result.add_failures(vec![
//!     ValidationFailure::new().with_message("a"),
//!     ValidationFailure::new().with_code("X"),
//! ]);
//!
//! assert!(result.is_invalid());
//! assert_eq!(result.failure_messages(), vec!["a"]);
//! assert_eq!(result.failure_codes(), vec!["X"]);
//! ```

use std::fmt;
use std::slice;

use crate::failure::ValidationFailure;

/// Ordered collection of the failures produced by one pass.
///
/// `is_valid()` holds exactly when no failure was recorded. Failures keep
/// insertion order and duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    failures: Vec<ValidationFailure>,
}

impl ValidationResult {
    /// Creates an empty, valid result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no failure was recorded.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns `true` if at least one failure was recorded.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Appends one failure.
    pub fn add_failure(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    /// Appends failures in iteration order.
    ///
    /// An absent batch is a no-op: pass `None` (an `Option` iterates over
    /// zero or one failure) or flatten an `Option<Vec<_>>`.
    ///
    /// ```
    /// use tollgate::{ValidationFailure, ValidationResult};
    ///
    /// let mut result = ValidationResult::new();
    /// result.add_failures(None);
    /// let missing: Option<Vec<ValidationFailure>> = None;
    /// result.add_failures(missing.into_iter().flatten());
    /// assert!(result.is_valid());
    /// ```
    pub fn add_failures<I>(&mut self, failures: I)
    where
        I: IntoIterator<Item = ValidationFailure>,
    {
        self.failures.extend(failures);
    }

    /// Returns a copy of every failure, in insertion order.
    ///
    /// The copy is detached: changing it does not touch this result.
    pub fn failures(&self) -> Vec<ValidationFailure> {
        self.failures.clone()
    }

    /// Iterates over the recorded failures without copying them.
    pub fn iter(&self) -> slice::Iter<'_, ValidationFailure> {
        self.failures.iter()
    }

    /// Number of recorded failures.
    #[inline]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Messages of the failures that carry one, in insertion order.
    ///
    /// Unset and empty messages are skipped.
    pub fn failure_messages(&self) -> Vec<&str> {
        self.failures
            .iter()
            .filter_map(ValidationFailure::message)
            .filter(|message| !message.is_empty())
            .collect()
    }

    /// Codes of the failures that carry one, in insertion order.
    ///
    /// Unset and empty codes are skipped.
    pub fn failure_codes(&self) -> Vec<&str> {
        self.failures
            .iter()
            .filter_map(ValidationFailure::code)
            .filter(|code| !code.is_empty())
            .collect()
    }

    /// Consumes the result, returning the failures.
    pub fn into_failures(self) -> Vec<ValidationFailure> {
        self.failures
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a ValidationFailure;
    type IntoIter = slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("valid");
        }

        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}
