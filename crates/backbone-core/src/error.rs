//! The error type shared by grid storage and the navigation layer.

use std::fmt;

use crate::geom::GridCell;

/// Errors raised by grid access, path requests and coordinate conversion.
///
/// An empty path is *not* an error: it means the end was unreachable. A
/// `NavError` always means the input itself was malformed.
#[derive(Debug, Clone, PartialEq)]
pub enum NavError {
    /// A grid was accessed outside `[0, width) × [0, height)`.
    OutOfRange {
        cell: GridCell,
        width: i32,
        height: i32,
    },
    /// An argument was rejected before any work was done.
    InvalidArgument(String),
}

impl NavError {
    /// Shorthand for [`NavError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                cell,
                width,
                height,
            } => write!(f, "grid cell {cell} is outside a {width}x{height} grid"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for NavError {}
