//! The default, minimal error value.

use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::{ErrorValue, FromMessage};

/// Error value holding a single textual message.
///
/// Present iff the message is non-empty; the default (empty) value is the
/// "no error" sentinel. This is the natural target type for
/// [`coerce`](crate::convert::coerce) and the default error type of
/// producers that have nothing structured to report.
///
/// # Examples
///
/// ```
/// use error_link::{BasicError, ErrorValue};
///
/// let err = BasicError::new("connection reset");
/// assert!(err.is_present());
/// assert_eq!(err.message(), "connection reset");
///
/// assert!(!BasicError::default().is_present());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicError {
    message: String,
}

impl BasicError {
    /// Creates an error carrying `message`. Empty means absent.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl fmt::Display for BasicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl ErrorValue for BasicError {
    #[inline]
    fn is_present(&self) -> bool {
        !self.message.is_empty()
    }
}

impl FromMessage for BasicError {
    #[inline]
    fn from_message(message: String) -> Self {
        Self { message }
    }
}

impl From<String> for BasicError {
    #[inline]
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for BasicError {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BasicError {}

#[cfg(feature = "std")]
impl BasicError {
    /// Renders an OS-level I/O failure as `"<text> (<code>)"`.
    ///
    /// Mirrors the classic errno rendering: `"No such file or directory
    /// (2)"` rather than std's `"No such file or directory (os error 2)"`.
    /// Non-OS errors keep their `Display` text unchanged.
    pub fn from_io(error: &std::io::Error) -> Self {
        match error.raw_os_error() {
            Some(code) => {
                let rendered = error.to_string();
                let suffix = format!(" (os error {code})");
                let text = rendered.strip_suffix(suffix.as_str()).unwrap_or(rendered.as_str());
                Self::new(format!("{text} ({code})"))
            }
            None => Self::new(error.to_string()),
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for BasicError {
    #[inline]
    fn from(error: std::io::Error) -> Self {
        Self::from_io(&error)
    }
}
