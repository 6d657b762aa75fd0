//! The optional chain capability.

use crate::traits::ErrorValue;

/// Capability of producing the immediate underlying cause.
///
/// A wrapper error that layers context over a more primitive failure
/// implements `Chained` to hand that failure back out, one level at a
/// time. Chains are acyclic by construction: each link is a different,
/// more primitive type (or the same type with stripped context), so
/// repeated unwrapping always reaches a type without the capability.
///
/// Implementors must also override
/// [`ErrorValue::cause_dyn`] to return the same link; the typed method
/// serves callers, the dynamic one serves the conversion walk.
///
/// # Examples
///
/// ```
/// use error_link::{chain, make, BasicError, ErrorValue, PathError};
///
/// let err: PathError = PathError::new("stat", "a.txt", make("missing"));
/// let cause: BasicError = chain::unwrap(&err);
/// assert_eq!(cause.message(), "missing");
/// ```
pub trait Chained: ErrorValue {
    /// Type of the immediate underlying cause.
    type Cause: ErrorValue;

    /// Returns the immediate underlying cause, one level only.
    fn unwrap(&self) -> Self::Cause;
}
