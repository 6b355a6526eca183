//! Extracted property values and the accessors that produce them
//!
//! A property read off an object is in one of three states: it was never set
//! ([`PropertyValue::Undefined`]), it was set to null ([`PropertyValue::Null`]),
//! or it holds a value ([`PropertyValue::Defined`]). Conditions and validators
//! treat the three states differently, so the distinction is kept explicit
//! instead of being folded into a single `Option`.
//!
//! # Examples
//!
//! ```
//! use tollgate::{Accessor, PropertyValue};
//!
//! struct Profile {
//!     nickname: Option<Option<String>>,
//! }
//!
//! let nickname =
//!     Accessor::new(|p: &Profile| Ok(PropertyValue::from_nullable(p.nickname.clone())));
//!
//! let unset = Profile { nickname: None };
//! let cleared = Profile { nickname: Some(None) };
//! let set = Profile { nickname: Some(Some("neo".to_string())) };
//!
//! assert_eq!(nickname.get(&unset), Ok(PropertyValue::Undefined));
//! assert_eq!(nickname.get(&cleared), Ok(PropertyValue::Null));
//! assert_eq!(nickname.get(&set), Ok(PropertyValue::Defined("neo".to_string())));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::AccessError;

/// The value of one property, as seen by conditions and validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyValue<V> {
    /// The property was never assigned.
    #[default]
    Undefined,
    /// The property was explicitly set to null.
    Null,
    /// The property holds a value.
    Defined(V),
}

impl<V> PropertyValue<V> {
    /// Builds a value from a nullable optional field.
    ///
    /// The outer `None` means undefined, the inner `None` means null.
    ///
    /// ```
    /// use tollgate::PropertyValue;
    ///
    /// assert_eq!(PropertyValue::<i32>::from_nullable(None), PropertyValue::Undefined);
    /// assert_eq!(PropertyValue::<i32>::from_nullable(Some(None)), PropertyValue::Null);
    /// assert_eq!(PropertyValue::from_nullable(Some(Some(1))), PropertyValue::Defined(1));
    /// ```
    pub fn from_nullable(value: Option<Option<V>>) -> Self {
        match value {
            None => PropertyValue::Undefined,
            Some(None) => PropertyValue::Null,
            Some(Some(v)) => PropertyValue::Defined(v),
        }
    }

    /// Returns `true` if the property was never assigned.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, PropertyValue::Undefined)
    }

    /// Returns `true` if the property was explicitly set to null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Returns `true` if the property holds a value.
    #[inline]
    pub fn is_defined(&self) -> bool {
        matches!(self, PropertyValue::Defined(_))
    }

    /// Borrows the held value.
    #[inline]
    pub fn as_ref(&self) -> PropertyValue<&V> {
        match self {
            PropertyValue::Undefined => PropertyValue::Undefined,
            PropertyValue::Null => PropertyValue::Null,
            PropertyValue::Defined(v) => PropertyValue::Defined(v),
        }
    }

    /// Returns the held value by reference, collapsing undefined and null.
    #[inline]
    pub fn as_option(&self) -> Option<&V> {
        match self {
            PropertyValue::Defined(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the held value, collapsing undefined and null.
    #[inline]
    pub fn into_option(self) -> Option<V> {
        match self {
            PropertyValue::Defined(v) => Some(v),
            _ => None,
        }
    }

    /// Transforms the held value, keeping undefined and null as they are.
    pub fn map<U, F>(self, f: F) -> PropertyValue<U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            PropertyValue::Undefined => PropertyValue::Undefined,
            PropertyValue::Null => PropertyValue::Null,
            PropertyValue::Defined(v) => PropertyValue::Defined(f(v)),
        }
    }
}

impl<V> From<Option<V>> for PropertyValue<V> {
    /// `None` is treated as undefined.
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => PropertyValue::Defined(v),
            None => PropertyValue::Undefined,
        }
    }
}

/// What an accessor returns: the property value, or a fault while reaching it.
pub type AccessResult<V> = Result<PropertyValue<V>, AccessError>;

/// A shareable function from an owning object to one of its property values.
///
/// Accessors are cheap to clone; a rule and its condition usually share the
/// same one.
pub struct Accessor<T: ?Sized, V> {
    get: Arc<dyn Fn(&T) -> AccessResult<V> + Send + Sync>,
}

impl<T: ?Sized, V> Accessor<T, V> {
    /// Wraps an accessor function.
    pub fn new<F>(get: F) -> Self
    where
        F: Fn(&T) -> AccessResult<V> + Send + Sync + 'static,
    {
        Self { get: Arc::new(get) }
    }

    /// Reads the property off `owner`.
    #[inline]
    pub fn get(&self, owner: &T) -> AccessResult<V> {
        (self.get)(owner)
    }
}

// Manual impl: the closure type is erased and V need not be Clone.
impl<T: ?Sized, V> Clone for Accessor<T, V> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
        }
    }
}

impl<T: ?Sized, V> fmt::Debug for Accessor<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("get", &"<function>")
            .finish()
    }
}
