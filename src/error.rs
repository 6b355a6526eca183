//! Error types for property access and rule configuration.
//!
//! Neither type ever describes a *validation* failure: those are data and live
//! in [`ValidationResult`](crate::ValidationResult). [`AccessError`] is produced
//! by accessors and suppressed by conditions, [`RuleError`] is returned while
//! rules are being put together.

use thiserror::Error;

/// A fault raised while reading a property off its owning object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// An intermediate object on the property path was absent.
    #[error("missing intermediate value '{segment}' on property path")]
    MissingIntermediate {
        /// Name of the absent path segment.
        segment: String,
    },

    /// Any other accessor fault.
    #[error("property access failed: {0}")]
    Failed(String),
}

impl AccessError {
    /// Creates a missing intermediate error.
    pub fn missing(segment: impl Into<String>) -> Self {
        Self::MissingIntermediate {
            segment: segment.into(),
        }
    }

    /// Creates a generic accessor failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// A configuration fault detected while building rules or validators.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A rule was declared without any validator.
    #[error("rule for property '{property}' has no validators")]
    NoValidators {
        /// Property the rule was declared for.
        property: String,
    },

    /// A pattern validator was given a pattern that does not compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Compilation error from the regex engine.
        #[source]
        source: regex::Error,
    },
}

impl RuleError {
    /// Creates an empty validator list error.
    pub fn no_validators(property: impl Into<String>) -> Self {
        Self::NoValidators {
            property: property.into(),
        }
    }
}

/// Optional chaining for accessors.
///
/// Turns a missing intermediate [`Option`] into an [`AccessError`] so property
/// paths can be walked with `?`.
///
/// # Example
///
/// ```rust
/// use tollgate::{AccessError, AccessExt, PropertyValue};
///
/// struct Address { city: Option<String> }
/// struct User { address: Option<Address> }
///
/// fn city(user: &User) -> Result<PropertyValue<String>, AccessError> {
///     Ok(user.address.as_ref().or_missing("address")?.city.clone().into())
/// }
///
/// let user = User { address: None };
/// assert_eq!(city(&user), Err(AccessError::missing("address")));
/// ```
pub trait AccessExt<T> {
    /// Returns the inner value, or `AccessError::MissingIntermediate` naming `segment`.
    fn or_missing(self, segment: &str) -> Result<T, AccessError>;
}

impl<T> AccessExt<T> for Option<T> {
    #[inline]
    fn or_missing(self, segment: &str) -> Result<T, AccessError> {
        self.ok_or_else(|| AccessError::missing(segment))
    }
}
