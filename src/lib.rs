//! Go-style error values: presence, cause chains, and cross-type
//! conversion without a common base type.
//!
//! Every error representation is its own type implementing
//! [`ErrorValue`]; nothing inherits from a shared base and nothing is
//! thrown. Producers return `(value, error)` pairs where a
//! default-constructed error means "no failure". Consumers test
//! presence, render messages, walk causes with [`chain`], recover
//! concrete types from generic ones with [`error_as`], and compose
//! heterogeneous fallible steps with [`try_then`].
//!
//! # Examples
//!
//! ## Presence, messages, and cause recovery
//!
//! ```
//! use error_link::{error_as, make, BasicError, ErrorValue, PathError};
//!
//! let err: PathError = PathError::new("open", "/etc/app.conf", make("permission denied"));
//! assert!(err.is_present());
//! assert_eq!(err.message(), "open /etc/app.conf: permission denied");
//!
//! // Recover the primitive failure through the chain.
//! let mut root = BasicError::default();
//! assert!(error_as(&err, &mut root));
//! assert_eq!(root.message(), "permission denied");
//! ```
//!
//! ## Sequencing fallible steps
//!
//! ```
//! use error_link::{make, try_then, BasicError, ErrorValue};
//!
//! let prior = ("42".to_string(), BasicError::default());
//! let (value, error): (i32, BasicError) = try_then(prior, |s| {
//!     match s.parse::<i32>() {
//!         Ok(n) => (n, BasicError::default()),
//!         Err(e) => (0, make(e.to_string())),
//!     }
//! });
//!
//! assert_eq!(value, 42);
//! assert!(!error.is_present());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Cause-chain walking: `unwrap`, `causes`, `chain_messages`
pub mod chain;
/// Cross-type conversion: `error_as`, `error_is`, `coerce`
pub mod convert;
/// Construction macro `format_err!`
pub mod macros;
/// Construction helpers `make` and `format`
pub mod make;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Sequencing combinator `try_then` and the fluent `Sequence`
pub mod sequence;
/// Capability contracts for error values
pub mod traits;
/// Concrete error values `BasicError` and `PathError`
pub mod types;

/// Tracing integration for pairs (requires the `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

// Re-export the full operation surface at the root; `prelude` remains the
// recommended import for applications.
pub use chain::{causes, chain_messages, unwrap, Causes};
pub use convert::{absorb_via, coerce, error_as, error_is};
pub use make::{format, make};
pub use sequence::{try_then, Sequence};
pub use traits::{Chained, DynError, ErrorValue, FromMessage, PairExt, ResultPairExt};
pub use types::{BasicError, ErrorVec, PathError};
