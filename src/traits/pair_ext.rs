//! Bridges between the `(value, error)` pair convention and `Result`.
//!
//! Producers in this crate return pairs: the value slot always exists and
//! absence of failure is signalled by a default-constructed error, not by
//! an `Option` or a separate flag. These extension traits convert to and
//! from `Result` at the boundary where code written against `?` meets
//! code written against pairs.
//!
//! # Examples
//!
//! ```
//! use error_link::{make, BasicError, PairExt, ResultPairExt};
//!
//! let failure: BasicError = make("boom");
//! let pair = (0u32, failure);
//! assert!(pair.into_result().is_err());
//!
//! let ok: Result<u32, BasicError> = Ok(7);
//! let (value, error) = ok.into_pair();
//! assert_eq!(value, 7);
//! assert!(!error_link::ErrorValue::is_present(&error));
//! ```

use crate::traits::ErrorValue;

/// Converts a `(value, error)` pair into a `Result`.
pub trait PairExt<T, E> {
    /// `Err` iff the error slot is present, `Ok` with the value otherwise.
    fn into_result(self) -> Result<T, E>;
}

impl<T, E: ErrorValue> PairExt<T, E> for (T, E) {
    #[inline]
    fn into_result(self) -> Result<T, E> {
        let (value, error) = self;
        if error.is_present() {
            Err(error)
        } else {
            Ok(value)
        }
    }
}

/// Converts a `Result` into a `(value, error)` pair.
pub trait ResultPairExt<T, E> {
    /// `Ok(v)` becomes `(v, E::default())`; `Err(e)` becomes
    /// `(T::default(), e)`.
    fn into_pair(self) -> (T, E);
}

impl<T: Default, E: ErrorValue> ResultPairExt<T, E> for Result<T, E> {
    #[inline]
    fn into_pair(self) -> (T, E) {
        match self {
            Ok(value) => (value, E::default()),
            Err(error) => (T::default(), error),
        }
    }
}
