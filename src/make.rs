//! Construction helpers for message-carrying error values.

use alloc::string::String;
use core::fmt::Arguments;

use crate::traits::FromMessage;

/// Builds an error value of type `E` carrying `message`.
///
/// A non-empty message produces a present value whose
/// [`message`](crate::traits::ErrorValue::message) is exactly the input;
/// an empty message produces the absent sentinel. Types with fields
/// beyond the message keep their own constructors
/// (e.g. [`PathError::new`](crate::types::PathError::new)).
///
/// # Examples
///
/// ```
/// use error_link::{make, BasicError, ErrorValue};
///
/// let err: BasicError = make("abc");
/// assert!(err.is_present());
/// assert_eq!(err.message(), "abc");
/// ```
#[inline]
pub fn make<E: FromMessage, M: Into<String>>(message: M) -> E {
    E::from_message(message.into())
}

/// Renders `args` and forwards the text to [`make`].
///
/// Formatting is dynamic and never fails in the error sense: a malformed
/// template is rejected at compile time, and the rendered message has no
/// length ceiling. Usually invoked through
/// [`format_err!`](crate::format_err).
#[inline]
pub fn format<E: FromMessage>(args: Arguments<'_>) -> E {
    E::from_message(alloc::fmt::format(args))
}
