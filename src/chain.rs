//! Walking cause chains.

use alloc::string::String;
use core::iter::FusedIterator;

use crate::traits::{Chained, DynError, ErrorValue};
use crate::types::ErrorVec;

/// Returns the immediate underlying cause of `error`, one level only.
///
/// Deeper chains require repeated application.
///
/// # Examples
///
/// ```
/// use error_link::{chain, make, BasicError, ErrorValue, PathError};
///
/// let err: PathError = PathError::new("fopen", "testdata/1.txt", make("No such file or directory (2)"));
/// let cause: BasicError = chain::unwrap(&err);
/// assert_eq!(cause.message(), "No such file or directory (2)");
/// ```
#[inline]
pub fn unwrap<E: Chained>(error: &E) -> E::Cause {
    error.unwrap()
}

/// Iterator over an error and each of its successive causes.
///
/// Yields dynamic views, outermost first. Returned by [`causes`].
pub struct Causes<'a> {
    next: Option<&'a dyn DynError>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a dyn DynError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl FusedIterator for Causes<'_> {}

/// Iterates over `error` and every link of its cause chain.
///
/// # Examples
///
/// ```
/// use error_link::{causes, make, PathError};
///
/// let err: PathError = PathError::new("stat", "a.txt", make("missing"));
/// let messages: Vec<String> = causes(&err).map(|link| link.describe()).collect();
/// assert_eq!(messages, ["stat a.txt: missing", "missing"]);
/// ```
pub fn causes<E: ErrorValue>(error: &E) -> Causes<'_> {
    Causes { next: Some(error) }
}

/// Collects the rendered message of every chain link, outermost first.
pub fn chain_messages<E: ErrorValue>(error: &E) -> ErrorVec<String> {
    causes(error).map(|link| link.describe()).collect()
}
