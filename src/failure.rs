//! A single recorded violation

use std::fmt;

/// One failed check: which property, with what code and message.
///
/// Every field is optional; reporting code must cope with any of them unset.
/// Values are assembled once with the `with_*` methods and never change
/// afterwards.
///
/// # Example
///
/// ```
/// use tollgate::ValidationFailure;
///
/// let failure = ValidationFailure::new()
///     .with_code("E_EMPTY")
///     .with_message("name must not be empty")
///     .with_target("name");
///
/// assert_eq!(failure.code(), Some("E_EMPTY"));
/// assert_eq!(failure.to_string(), "[E_EMPTY] name: name must not be empty");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationFailure {
    code: Option<String>,
    message: Option<String>,
    target: Option<String>,
}

impl ValidationFailure {
    /// Creates a failure with no code, message or target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failure code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the human readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the property the failure refers to.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// The failure code, if one was configured.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The failure message, if one was configured.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The property the failure refers to.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separate = false;
        if let Some(code) = &self.code {
            write!(f, "[{}]", code)?;
            separate = true;
        }
        if let Some(target) = &self.target {
            if separate {
                f.write_str(" ")?;
            }
            write!(f, "{}:", target)?;
            separate = true;
        }
        match &self.message {
            Some(message) => {
                if separate {
                    f.write_str(" ")?;
                }
                f.write_str(message)
            }
            None if !separate => f.write_str("validation failed"),
            None => Ok(()),
        }
    }
}
