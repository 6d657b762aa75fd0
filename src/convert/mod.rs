//! Cross-type conversion between unrelated error representations.
//!
//! There is no universal downcast and no common base: [`error_as`]
//! recovers a concrete error type from a generic one by trying a short
//! ordered chain of strategies per chain link — direct absorption into
//! the target (identity, or any construction the target declares via
//! [`ErrorValue::absorb`]), then descent into the link's cause. The walk
//! is the trait-object rendition of a compile-time strategy ladder;
//! absorption itself is monomorphized per `(source, target)` pair.
//!
//! # Examples
//!
//! ```
//! use error_link::convert::{error_as, error_is};
//! use error_link::{make, BasicError, ErrorValue, PathError};
//!
//! let err: PathError = PathError::new("read", "data.bin", make("eof"));
//!
//! // The wrapper itself converts (identity), and so does its cause type.
//! assert!(error_is::<PathError, _>(&err));
//! assert!(error_is::<BasicError, _>(&err));
//!
//! let mut root = BasicError::default();
//! assert!(error_as(&err, &mut root));
//! assert_eq!(root.message(), "eof");
//! ```

use crate::traits::{DynError, ErrorValue, FromMessage};

/// Attempts to populate `target` with information from `source`.
///
/// Strategies, in order, first success wins:
///
/// 1. `target` absorbs the current link directly — always succeeds for a
///    link of the target's own type (identity clone), and for any other
///    source shape the target's [`ErrorValue::absorb`] override declares.
/// 2. The current link exposes a cause: descend one level and retry.
/// 3. Chain exhausted: report failure, leaving `target` untouched.
///
/// Terminates because cause chains are finite and acyclic by
/// construction; the walk does not detect cycles.
///
/// # Examples
///
/// ```
/// use error_link::{error_as, make, BasicError};
///
/// // Identity: converting into the source's own type is a clone.
/// let source: BasicError = make("boom");
/// let mut copy = BasicError::default();
/// assert!(error_as(&source, &mut copy));
/// assert_eq!(copy, source);
/// ```
pub fn error_as<T: ErrorValue, E: ErrorValue>(source: &E, target: &mut T) -> bool {
    let mut current: &dyn DynError = source;
    loop {
        if target.absorb(current) {
            return true;
        }
        match current.cause() {
            Some(next) => current = next,
            None => return false,
        }
    }
}

/// Reports whether `source` can be classified as a `T`.
///
/// Built on [`error_as`] with a discarded default target; succeeds for
/// exactly the sources `error_as` would convert.
///
/// # Examples
///
/// ```
/// use error_link::{error_is, make, BasicError, PathError};
///
/// let err: PathError = PathError::new("stat", "a.txt", make("missing"));
/// assert!(error_is::<BasicError, _>(&err));
/// ```
#[inline]
pub fn error_is<T: ErrorValue, E: ErrorValue>(source: &E) -> bool {
    let mut target = T::default();
    error_as(source, &mut target)
}

/// Converts `source` into a `T`, never losing a present failure.
///
/// Runs [`error_as`]; when no conversion path exists, falls back to
/// building the target from the source's rendered message instead of
/// silently reporting "no error". An absent source always yields
/// `T::default()`.
///
/// # Examples
///
/// ```
/// use error_link::{coerce, BasicError, ErrorValue};
/// use core::fmt;
///
/// #[derive(Debug, Clone, Default)]
/// struct Numeric {
///     code: i32,
/// }
///
/// impl fmt::Display for Numeric {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "code {}", self.code)
///     }
/// }
///
/// impl ErrorValue for Numeric {
///     fn is_present(&self) -> bool {
///         self.code != 0
///     }
/// }
///
/// // No route from Numeric to BasicError: the message text survives.
/// let fallback: BasicError = coerce(&Numeric { code: 7 });
/// assert!(fallback.is_present());
/// assert_eq!(fallback.message(), "code 7");
/// ```
pub fn coerce<T, E>(source: &E) -> T
where
    T: ErrorValue + FromMessage,
    E: ErrorValue,
{
    if !source.is_present() {
        return T::default();
    }
    let mut target = T::default();
    if !error_as(source, &mut target) {
        #[cfg(feature = "tracing")]
        tracing::debug!(source = %source.message(), "no conversion path, preserving message text");
        target = T::from_message(source.message());
    }
    target
}

/// Helper for [`ErrorValue::absorb`] overrides built on `From` impls.
///
/// Downcasts `source` to `S` and, on a match, converts it into a `T`.
/// See the [`ErrorValue::absorb`] documentation for a worked example.
#[inline]
pub fn absorb_via<S, T>(source: &dyn DynError) -> Option<T>
where
    S: ErrorValue,
    T: From<S>,
{
    source.as_any().downcast_ref::<S>().map(|value| T::from(value.clone()))
}
