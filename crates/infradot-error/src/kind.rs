//! Error kinds for infradot operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to decide how to handle a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// The requested feature or value is not supported
    Unsupported,

    /// Invalid argument passed to a function
    InvalidArgument,

    // =========================================================================
    // Graph model errors
    // =========================================================================
    /// A node was created with an empty identifier
    InvalidIdentifier,

    /// A shape has no renderer keyword
    UnsupportedShape,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
