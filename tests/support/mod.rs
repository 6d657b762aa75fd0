//! Fixture error types shared across the test modules.
#![allow(dead_code)]

use core::fmt;

use error_link::{absorb_via, BasicError, DynError, ErrorValue};

/// Error with no message payload and no conversion route besides itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flag {
    pub raised: bool,
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raised {
            f.write_str("flag raised")
        } else {
            Ok(())
        }
    }
}

impl ErrorValue for Flag {
    fn is_present(&self) -> bool {
        self.raised
    }
}

/// Error that absorbs `BasicError` through its `From` impl.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusError {
    pub status: u16,
    pub text: String,
}

impl StatusError {
    pub fn new(status: u16, text: impl Into<String>) -> Self {
        Self { status, text: text.into() }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.text)
    }
}

impl From<BasicError> for StatusError {
    fn from(err: BasicError) -> Self {
        Self { status: 500, text: err.message() }
    }
}

impl ErrorValue for StatusError {
    fn is_present(&self) -> bool {
        self.status != 0
    }

    fn absorb(&mut self, source: &dyn DynError) -> bool {
        if let Some(same) = source.as_any().downcast_ref::<Self>() {
            *self = same.clone();
            return true;
        }
        if let Some(converted) = absorb_via::<BasicError, Self>(source) {
            *self = converted;
            return true;
        }
        false
    }
}

/// User-defined one-level chain over [`StatusError`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayError {
    pub upstream: String,
    pub cause: StatusError,
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gateway {}: {}", self.upstream, self.cause)
    }
}

impl ErrorValue for GatewayError {
    fn is_present(&self) -> bool {
        self.cause.is_present()
    }

    fn cause_dyn(&self) -> Option<&dyn DynError> {
        Some(&self.cause)
    }
}

impl error_link::Chained for GatewayError {
    type Cause = StatusError;

    fn unwrap(&self) -> StatusError {
        self.cause.clone()
    }
}
