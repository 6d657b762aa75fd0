//! Concrete error values shipped with the crate.
//!
//! Both are ordinary value types: no shared base, no identity beyond
//! their content. Anything downstream can define its own error types on
//! equal footing by implementing [`ErrorValue`](crate::traits::ErrorValue).
//!
//! # Examples
//!
//! ```
//! use error_link::{make, BasicError, ErrorValue, PathError};
//!
//! let root: BasicError = make("permission denied");
//! let scoped = PathError::new("open", "/etc/shadow", root);
//! assert_eq!(scoped.message(), "open /etc/shadow: permission denied");
//! ```
use smallvec::SmallVec;

pub mod basic_error;
pub mod path_error;

pub use basic_error::*;
pub use path_error::*;

/// SmallVec-backed collection used when materializing cause chains.
///
/// Inline storage for two elements covers the common case of one wrapper
/// plus one root cause without touching the heap.
pub type ErrorVec<T> = SmallVec<[T; 2]>;
