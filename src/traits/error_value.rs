//! The error capability contract.
//!
//! Any type can act as an error value — there is no base class and no
//! universal error enum. A type opts in by implementing [`ErrorValue`],
//! which asks for exactly four things beyond the supertraits:
//!
//! - a **presence flag** ([`is_present`](ErrorValue::is_present)) that is
//!   `false` for a default-constructed value (the canonical "no error"
//!   sentinel),
//! - a **message** ([`message`](ErrorValue::message)), provided for free
//!   from the type's `Display` impl,
//! - an optional **cause link** ([`cause_dyn`](ErrorValue::cause_dyn)) for
//!   wrapper types that layer context over a more primitive failure,
//! - an **absorb hook** ([`absorb`](ErrorValue::absorb)) that declares
//!   which source shapes the type can be populated from during
//!   [`error_as`](crate::convert::error_as) conversion.
//!
//! # Examples
//!
//! ```
//! use error_link::ErrorValue;
//! use core::fmt;
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Timeout {
//!     millis: u64,
//! }
//!
//! impl fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "timed out after {}ms", self.millis)
//!     }
//! }
//!
//! impl ErrorValue for Timeout {
//!     fn is_present(&self) -> bool {
//!         self.millis != 0
//!     }
//! }
//!
//! assert!(!Timeout::default().is_present());
//! assert_eq!(Timeout { millis: 250 }.message(), "timed out after 250ms");
//! ```

use alloc::string::{String, ToString};
use core::any::Any;
use core::fmt::Display;

/// Contract satisfied by any type used as an error value.
///
/// The supertraits carry most of the contract: `Default` produces the
/// "no error" sentinel, `Clone` makes error values plain data that can be
/// copied across call boundaries, `Display` is the single source of the
/// rendered message, and `Any` lets conversion match concrete types
/// without a shared base.
///
/// # Invariant
///
/// `Self::default().is_present()` must be `false`. Absence is signalled by
/// the default value, never by a separate wrapper.
pub trait ErrorValue: Any + Default + Clone + Display {
    /// Returns `true` iff this value represents an actual failure.
    fn is_present(&self) -> bool;

    /// Human-readable description of the failure.
    ///
    /// Defaults to the `Display` rendering; override only when the two
    /// must differ, which is rare.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Dynamic view of the immediate underlying cause, if any.
    ///
    /// Wrapper types that also implement [`Chained`](crate::traits::Chained)
    /// must override this to expose the same link, so that
    /// [`error_as`](crate::convert::error_as) can descend the chain.
    fn cause_dyn(&self) -> Option<&dyn DynError> {
        None
    }

    /// Conversion hook: attempt to populate `self` from `source`.
    ///
    /// The default accepts exactly one shape — a source of type `Self` —
    /// and clones it in. Types constructible from other error types
    /// override this to accept those shapes too, typically with
    /// [`absorb_via`](crate::convert::absorb_via) on top of an existing
    /// `From` impl:
    ///
    /// ```
    /// use error_link::{absorb_via, error_as, make, BasicError, DynError, ErrorValue};
    /// use core::fmt;
    ///
    /// #[derive(Debug, Clone, Default)]
    /// struct StatusError {
    ///     status: u16,
    ///     text: String,
    /// }
    ///
    /// impl fmt::Display for StatusError {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         write!(f, "{} {}", self.status, self.text)
    ///     }
    /// }
    ///
    /// impl From<BasicError> for StatusError {
    ///     fn from(err: BasicError) -> Self {
    ///         Self { status: 500, text: err.message() }
    ///     }
    /// }
    ///
    /// impl ErrorValue for StatusError {
    ///     fn is_present(&self) -> bool {
    ///         self.status != 0
    ///     }
    ///
    ///     fn absorb(&mut self, source: &dyn DynError) -> bool {
    ///         if let Some(same) = source.as_any().downcast_ref::<Self>() {
    ///             *self = same.clone();
    ///             return true;
    ///         }
    ///         if let Some(converted) = absorb_via::<BasicError, Self>(source) {
    ///             *self = converted;
    ///             return true;
    ///         }
    ///         false
    ///     }
    /// }
    ///
    /// let source: BasicError = make("backend unavailable");
    /// let mut status = StatusError::default();
    /// assert!(error_as(&source, &mut status));
    /// assert_eq!(status.status, 500);
    /// ```
    fn absorb(&mut self, source: &dyn DynError) -> bool {
        match source.as_any().downcast_ref::<Self>() {
            Some(value) => {
                *self = value.clone();
                true
            }
            None => false,
        }
    }
}

/// Object-safe view of an error value.
///
/// This is the currency of the cause-chain walk inside
/// [`error_as`](crate::convert::error_as): each link is visited as a
/// `&dyn DynError` regardless of its concrete type. Implemented for every
/// [`ErrorValue`] automatically; user code never implements it directly.
pub trait DynError {
    /// Concrete value for `Any`-based matching.
    fn as_any(&self) -> &dyn Any;

    /// Presence flag, see [`ErrorValue::is_present`].
    fn present(&self) -> bool;

    /// Rendered message, see [`ErrorValue::message`].
    fn describe(&self) -> String;

    /// Next link of the cause chain, see [`ErrorValue::cause_dyn`].
    fn cause(&self) -> Option<&dyn DynError>;
}

impl<E: ErrorValue> DynError for E {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn present(&self) -> bool {
        ErrorValue::is_present(self)
    }

    #[inline]
    fn describe(&self) -> String {
        ErrorValue::message(self)
    }

    #[inline]
    fn cause(&self) -> Option<&dyn DynError> {
        ErrorValue::cause_dyn(self)
    }
}
