//! Capability contracts every error representation opts into.
//!
//! - [`ErrorValue`]: presence flag, message, and the conversion hooks
//! - [`Chained`]: optional capability of producing an underlying cause
//! - [`FromMessage`]: constructibility from a bare message
//! - [`PairExt`] / [`ResultPairExt`]: pair ↔ `Result` bridges
//!
//! # Examples
//!
//! ```
//! use error_link::traits::{Chained, ErrorValue};
//! use error_link::{make, PathError};
//!
//! let err: PathError = PathError::new("open", "cfg.toml", make("missing"));
//! assert!(err.is_present());
//! assert_eq!(err.unwrap().message(), "missing");
//! ```

pub mod chained;
pub mod error_value;
pub mod from_message;
pub mod pair_ext;

pub use chained::Chained;
pub use error_value::{DynError, ErrorValue};
pub use from_message::FromMessage;
pub use pair_ext::{PairExt, ResultPairExt};
