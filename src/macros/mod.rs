//! Construction macro for formatted error values.

/// Builds an error value from a format template, like `format!` for
/// [`FromMessage`](crate::traits::FromMessage) types.
///
/// Expands to [`make::format`](crate::make::format) over
/// `format_args!`; the target type is picked by inference or annotation.
///
/// # Examples
///
/// ```
/// use error_link::{format_err, BasicError, ErrorValue};
///
/// let err: BasicError = format_err!("{} ({})", "No such file or directory", 2);
/// assert_eq!(err.message(), "No such file or directory (2)");
/// ```
#[macro_export]
macro_rules! format_err {
    ($($arg:tt)*) => {
        $crate::make::format(::core::format_args!($($arg)*))
    };
}
