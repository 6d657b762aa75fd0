//! Path-scoped wrapper error, the canonical one-level chain.

use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::{Chained, DynError, ErrorValue};
use crate::types::BasicError;

/// Error value scoping an underlying failure to an operation and a path.
///
/// Renders as `"{op} {path}: {cause}"` and is present exactly when its
/// cause is. Implements [`Chained`], so conversion with
/// [`error_as`](crate::convert::error_as) can look through it to the
/// underlying error:
///
/// ```
/// use error_link::{error_as, make, BasicError, ErrorValue, PathError};
///
/// let err: PathError = PathError::new("fopen", "testdata/1.txt", make("No such file or directory (2)"));
/// assert_eq!(err.message(), "fopen testdata/1.txt: No such file or directory (2)");
///
/// let mut root = BasicError::default();
/// assert!(error_as(&err, &mut root));
/// assert_eq!(root.message(), "No such file or directory (2)");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathError<E = BasicError> {
    op: String,
    path: String,
    cause: E,
}

impl<E: ErrorValue> PathError<E> {
    /// Wraps `cause` with the failed operation and the path it touched.
    #[inline]
    pub fn new(op: impl Into<String>, path: impl Into<String>, cause: E) -> Self {
        Self { op: op.into(), path: path.into(), cause }
    }

    /// Name of the failed operation.
    #[inline]
    pub fn op(&self) -> &str {
        &self.op
    }

    /// Path the operation was applied to.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Borrows the underlying cause.
    #[inline]
    pub fn cause(&self) -> &E {
        &self.cause
    }
}

impl<E: ErrorValue> fmt::Display for PathError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.op, self.path, self.cause)
    }
}

impl<E: ErrorValue> ErrorValue for PathError<E> {
    #[inline]
    fn is_present(&self) -> bool {
        self.cause.is_present()
    }

    #[inline]
    fn cause_dyn(&self) -> Option<&dyn DynError> {
        Some(&self.cause)
    }
}

impl<E: ErrorValue> Chained for PathError<E> {
    type Cause = E;

    #[inline]
    fn unwrap(&self) -> E {
        self.cause.clone()
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for PathError<E>
where
    E: ErrorValue + std::error::Error,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if self.cause.is_present() {
            Some(&self.cause)
        } else {
            None
        }
    }
}
