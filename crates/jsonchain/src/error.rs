use alloc::string::String;

use thiserror::Error;

/// Result alias used by every fallible builder operation.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors raised while selecting a path or assigning a formatted value.
///
/// All variants are fatal to the chain that produced them: the builder state
/// is consumed by the failing call, so the only way forward is to propagate
/// the error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A formatting trait implementation reported an error while rendering.
    #[error("format is invalid")]
    InvalidFormat,
    /// The rendered text does not fit into the fixed formatting buffer.
    #[error("buffer size is invalid. buffer size: {capacity}, required: {required}")]
    BufferOverrun {
        /// Capacity of the buffer in bytes, including the reserved byte.
        capacity: usize,
        /// Number of bytes the rendering would have produced.
        required: usize,
    },
    /// The path is not a well-formed JSON Pointer.
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath {
        /// The offending path text.
        path: String,
        /// What is wrong with it.
        reason: PathSyntaxError,
    },
}

/// Syntax problems detected while parsing a JSON Pointer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSyntaxError {
    /// The path is neither empty nor starts with a slash.
    #[error("a non-empty path must begin with '/'")]
    MissingLeadingSlash,
    /// A `~` escape is not `~0` or `~1`.
    #[error("'~' must be followed by '0' or '1'")]
    InvalidEscape,
}

impl BuildError {
    pub(crate) fn buffer_overrun(capacity: usize, required: usize) -> Self {
        BuildError::BufferOverrun { capacity, required }
    }

    pub(crate) fn invalid_path(path: &str, reason: PathSyntaxError) -> Self {
        BuildError::InvalidPath {
            path: path.into(),
            reason,
        }
    }
}
