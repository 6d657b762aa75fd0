//! Sequencing fallible steps across unrelated error types.
//!
//! Producers return `(value, error)` pairs in their own natural error
//! type; a pipeline of such steps still wants a single error type at the
//! boundary. [`try_then`] runs one continuation after a prior pair,
//! short-circuiting on failure and adapting whichever error occurs into
//! the caller's chosen type via [`coerce`](crate::convert::coerce).
//! [`Sequence`] is the fluent form for longer pipelines.
//!
//! # Examples
//!
//! ```
//! use error_link::{make, try_then, BasicError, ErrorValue, PathError};
//!
//! let prior: (Option<u8>, PathError) =
//!     (None, PathError::new("open", "data.bin", make("missing")));
//!
//! // The continuation is never invoked: the prior step already failed.
//! let (value, error): (u32, BasicError) =
//!     try_then(prior, |_| -> (u32, BasicError) { unreachable!() });
//!
//! assert_eq!(value, 0);
//! assert_eq!(error.message(), "missing");
//! ```

use crate::convert::coerce;
use crate::traits::{ErrorValue, FromMessage};

/// Runs `continuation` after `prior`, short-circuiting on failure.
///
/// - Prior error present: the continuation is **not** invoked; returns a
///   default value alongside the prior error adapted into `T`.
/// - Otherwise: invokes the continuation with the prior value and
///   returns its value alongside its error adapted into `T`.
///
/// Adaptation never hides a failure: when no conversion path into `T`
/// exists, the error's rendered message is preserved through
/// `T`'s [`FromMessage`] impl (see [`coerce`](crate::convert::coerce)).
///
/// # Examples
///
/// ```
/// use error_link::{make, try_then, BasicError, ErrorValue};
///
/// let prior = ("42".to_string(), BasicError::default());
/// let (value, error): (i32, BasicError) = try_then(prior, |s| {
///     match s.parse::<i32>() {
///         Ok(n) => (n, BasicError::default()),
///         Err(e) => (0, make(e.to_string())),
///     }
/// });
///
/// assert_eq!(value, 42);
/// assert!(!error.is_present());
/// ```
pub fn try_then<U, R, V, S, T, F>(prior: (U, R), continuation: F) -> (V, T)
where
    R: ErrorValue,
    S: ErrorValue,
    V: Default,
    T: ErrorValue + FromMessage,
    F: FnOnce(U) -> (V, S),
{
    let (value, error) = prior;
    if error.is_present() {
        return (V::default(), coerce(&error));
    }
    let (value, error) = continuation(value);
    let error = coerce(&error);
    (value, error)
}

/// Fluent pipeline over `(value, error)` pairs.
///
/// Each [`then`](Sequence::then) step runs only while no error has
/// occurred; the first failure is adapted into `E` and carried to the
/// end. Heterogeneous steps pay one conversion attempt each, not a
/// rethrow.
///
/// # Examples
///
/// ```
/// use error_link::{BasicError, ErrorValue, Sequence};
///
/// let (value, error) = Sequence::<_, BasicError>::start("42")
///     .then(|s| (s.len(), BasicError::default()))
///     .finish();
///
/// assert_eq!(value, 2);
/// assert!(!error.is_present());
/// ```
#[must_use]
pub struct Sequence<V, E> {
    value: V,
    error: E,
}

impl<V, E> Sequence<V, E>
where
    E: ErrorValue + FromMessage,
{
    /// Starts a pipeline from a known-good value.
    #[inline]
    pub fn start(value: V) -> Self {
        Self { value, error: E::default() }
    }

    /// Starts a pipeline from an existing pair, adapting its error.
    pub fn new<R: ErrorValue>(pair: (V, R)) -> Self {
        let (value, error) = pair;
        Self { value, error: coerce(&error) }
    }

    /// Runs `step` unless an earlier step already failed.
    pub fn then<U, S, F>(self, step: F) -> Sequence<U, E>
    where
        U: Default,
        S: ErrorValue,
        F: FnOnce(V) -> (U, S),
    {
        if self.error.is_present() {
            return Sequence { value: U::default(), error: self.error };
        }
        let (value, error) = step(self.value);
        Sequence { value, error: coerce(&error) }
    }

    /// Terminates the pipeline, returning the final pair.
    #[inline]
    pub fn finish(self) -> (V, E) {
        (self.value, self.error)
    }

    /// Terminates the pipeline as a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        if self.error.is_present() {
            Err(self.error)
        } else {
            Ok(self.value)
        }
    }
}
