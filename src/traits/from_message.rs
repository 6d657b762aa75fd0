use alloc::string::String;

use crate::traits::ErrorValue;

/// Error types constructible from a bare message.
///
/// Required by [`make`](crate::make::make) and
/// [`format`](crate::make::format), and by the message-preserving
/// fallback of [`coerce`](crate::convert::coerce). Types with extra
/// fields keep their own constructors and implement this for the
/// message-only case.
pub trait FromMessage: ErrorValue {
    /// Builds an error carrying exactly `message`.
    ///
    /// An empty message must produce an absent value, equivalent to
    /// `Self::default()`.
    fn from_message(message: String) -> Self;
}
