//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_link::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`format_err!`]
//! - **Types**: [`BasicError`], [`PathError`], [`Sequence`]
//! - **Traits**: [`ErrorValue`], [`Chained`], [`FromMessage`],
//!   [`PairExt`], [`ResultPairExt`]
//! - **Operations**: [`error_as`], [`error_is`], [`coerce`], [`make`],
//!   [`try_then`], [`unwrap`], [`causes`], [`chain_messages`]
//!
//! # Examples
//!
//! ```
//! use error_link::prelude::*;
//!
//! let err: PathError = PathError::new("open", "cfg.toml", make("missing"));
//! let mut root = BasicError::default();
//! assert!(error_as(&err, &mut root));
//! assert_eq!(root.message(), "missing");
//! ```

// Macros
pub use crate::format_err;

// Operations
pub use crate::chain::{causes, chain_messages, unwrap};
pub use crate::convert::{coerce, error_as, error_is};
pub use crate::make::make;
pub use crate::sequence::try_then;

// Core types
pub use crate::sequence::Sequence;
pub use crate::types::{BasicError, ErrorVec, PathError};

// Traits
pub use crate::traits::{Chained, ErrorValue, FromMessage, PairExt, ResultPairExt};
