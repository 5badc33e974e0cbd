// Copyright 2026 Developers of the fakerng project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use core::fmt;

#[cfg(feature = "std")]
use std::boxed::Box;

/// Error kind which can be matched over.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An explicit generator state failed the generator's validity
    /// predicate, e.g. an all-zero xoroshiro state.
    InvalidState,
    /// A numeric range was reversed or empty, or a sequence operation was
    /// given an empty sequence.
    InvalidRange,
    /// The operating system's entropy source could not be read.
    EntropySource,
    /// A generator was requested by a name that is not known.
    UnknownEngine,
}

impl ErrorKind {
    /// A description of this error kind
    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::InvalidState => "invalid generator state",
            ErrorKind::InvalidRange => "invalid range",
            ErrorKind::EntropySource => "entropy source failure",
            ErrorKind::UnknownEngine => "unknown engine",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Error type of random number generators
///
/// This is a relatively simple error type, designed for compatibility with and
/// without the Rust `std` library. It embeds a "kind" code, a message (static
/// string only), and an optional chained cause (`std` only).
///
/// Errors are always returned to the caller; nothing in this crate retries
/// or substitutes a default value.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    msg: &'static str,
    #[cfg(feature = "std")]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new instance, with specified kind and a message.
    pub fn new(kind: ErrorKind, msg: &'static str) -> Self {
        Error {
            kind,
            msg,
            #[cfg(feature = "std")]
            cause: None,
        }
    }

    /// Create a new instance, with specified kind, message, and a
    /// chained cause.
    ///
    /// In `no_std` mode the *cause* is ignored.
    #[cfg(feature = "std")]
    pub fn with_cause<E>(kind: ErrorKind, msg: &'static str, cause: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error {
            kind,
            msg,
            cause: Some(cause.into()),
        }
    }

    /// Create a new instance, with specified kind, message, and a
    /// chained cause.
    ///
    /// In `no_std` mode the *cause* is ignored.
    #[cfg(not(feature = "std"))]
    pub fn with_cause<E>(kind: ErrorKind, msg: &'static str, _cause: E) -> Self {
        Error::new(kind, msg)
    }

    /// Shorthand for an [`ErrorKind::InvalidRange`] error.
    pub fn invalid_range(msg: &'static str) -> Self {
        Error::new(ErrorKind::InvalidRange, msg)
    }

    /// Shorthand for an [`ErrorKind::InvalidState`] error.
    pub fn invalid_state(msg: &'static str) -> Self {
        Error::new(ErrorKind::InvalidState, msg)
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn msg(&self) -> &'static str {
        self.msg
    }

    /// Take the cause, if any. This allows the embedded cause to be extracted.
    /// This uses `Option::take`, leaving `self` with no cause.
    #[cfg(feature = "std")]
    pub fn take_cause(&mut self) -> Option<Box<dyn std::error::Error + Send + Sync>> {
        self.cause.take()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RNG error [{}]: {}", self.kind, self.msg)?;
        #[cfg(feature = "std")]
        {
            if let Some(ref cause) = self.cause {
                write!(f, "; cause: {}", cause)?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "getrandom")]
impl From<getrandom::Error> for Error {
    fn from(error: getrandom::Error) -> Self {
        Error::with_cause(ErrorKind::EntropySource, "getrandom error", error)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(error: Error) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, error)
    }
}
