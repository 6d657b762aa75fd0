//! Tracing integration for pair-returning producers.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-link = { version = "0.2", features = ["tracing"] }
//! ```

use crate::traits::ErrorValue;

/// Extension trait logging present errors as they flow through a pair.
///
/// # Examples
///
/// ```
/// use error_link::tracing_ext::TracedPair;
/// use error_link::{make, BasicError};
///
/// let pair: (u32, BasicError) = (0, make("connection refused"));
/// let pair = pair.traced("dial");
/// assert_eq!(pair.0, 0);
/// ```
pub trait TracedPair: Sized {
    /// Emits an error event when the pair carries a present error,
    /// then returns the pair untouched.
    fn traced(self, op: &str) -> Self;
}

impl<T, E: ErrorValue> TracedPair for (T, E) {
    fn traced(self, op: &str) -> Self {
        if self.1.is_present() {
            tracing::error!(op, error = %self.1.message(), "operation failed");
        }
        self
    }
}
