//! Decode-pipeline error taxonomy.
//!
//! Kinds, not causes: the CLI maps every variant here to exit code 3. The
//! config / baseline / usage errors that map to exit code 2 live with their
//! respective modules.

use thiserror::Error;

/// Everything that can go wrong between a DAR path and a lowered `Program`.
#[derive(Debug, Error)]
pub enum LfError {
    /// A container/payload/package size or count bound was exceeded.
    #[error("input limit exceeded: {0}")]
    InputLimit(String),

    /// Unreadable zip, missing envelope fields, unknown hash function,
    /// or a payload hash mismatch.
    #[error("malformed archive: {0}")]
    MalformedArchive(String),

    /// Inner package bytes do not parse under the selected dialect.
    #[error("decode failed: {0}")]
    Decode(String),

    /// Wire-structure node count or nesting depth bound exceeded.
    #[error("package structure limit exceeded: {0}")]
    StructureLimit(String),

    /// Version string unparseable, or `major.minor` outside the support set.
    #[error("unsupported Daml-LF version: {0}")]
    UnsupportedVersion(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
