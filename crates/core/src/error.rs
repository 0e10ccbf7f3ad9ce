//! Error types for the hufftext codec.
//!
//! All operations return structured errors rather than panicking.
//! This keeps malformed containers and degenerate inputs reportable
//! to the caller instead of aborting the process.

use thiserror::Error;

/// Top-level error type for all operations in the codec.
///
/// Each variant corresponds to a specific failure domain:
/// - Codebook: code construction failures (degenerate input)
/// - Container: parsing or decoding a serialized container
/// - I/O: reading stdin / writing stdout in the application shell
#[derive(Debug, Error)]
pub enum Error {
    /// Code construction error (e.g., nothing to build a code from)
    #[error("codebook error: {0}")]
    Codebook(#[from] CodebookError),

    /// Container parse or decode error
    #[error("container error: {0}")]
    Container(#[from] ContainerError),

    /// Stream I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Codebook construction errors.
#[derive(Debug, Error)]
pub enum CodebookError {
    /// No symbols to assign codes to (cannot build a codebook)
    #[error("empty input text: cannot build codebook")]
    EmptyText,
}

/// Container parsing and decoding errors.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Input ended before a `[Codes]` marker line was seen
    #[error("missing [Codes] section")]
    MissingCodesSection,

    /// Input ended before a `[Content]` marker line was seen
    #[error("missing [Content] section")]
    MissingContentSection,

    /// Codebook line without an `=` separator or without a quoted symbol
    #[error("malformed codebook line: {line:?}")]
    MalformedCodeLine { line: String },

    /// Escaped symbol that does not unescape to exactly one symbol
    #[error("invalid escaped symbol: {escaped:?}")]
    BadEscape { escaped: String },

    /// Content exhausted while bits remained in the accumulation buffer
    #[error("content does not match codebook: dangling bits {leftover:?}")]
    ContentMismatch { leftover: String },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
