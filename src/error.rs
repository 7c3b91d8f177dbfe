//! Unified error type.

use std::fmt;
use std::io;

/// The error type returned by kyu's fallible operations.
///
/// Route-level outcomes (404, malformed bodies) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type covers
/// infrastructure and configuration failures: binding the listener, a bad
/// `PORT` value, or an invalid classification rule.
#[derive(Debug)]
pub enum Error {
    /// Binding the listener or writing to an output sink failed.
    Io(io::Error),
    /// An environment variable held a value the server cannot use.
    Config(String),
    /// A classification rule was rejected at construction time.
    InvalidRule(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::InvalidRule(msg) => write!(f, "invalid rule: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(_) | Self::InvalidRule(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
