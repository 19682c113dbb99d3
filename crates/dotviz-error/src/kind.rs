//! Error kinds for dotviz operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on ErrorKind to decide how to handle specific error cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// Invalid argument passed to function
    InvalidArgument,

    // =========================================================================
    // Model errors
    // =========================================================================
    /// Attribute lookup on a container that never had it set
    AttributeNotFound,

    /// Graph type outside digraph/graph/subgraph
    InvalidGraphType,

    /// Subgraph lookup by a name that was never added
    GraphNotFound,

    // =========================================================================
    // Render errors
    // =========================================================================
    /// The external renderer exited with a non-zero status
    RenderFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // Serialization errors
    // =========================================================================
    /// Deserialization of a bundled document failed
    DeserializationFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
