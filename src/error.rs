//! Error kinds shared by the parsing and archiving core.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Input bytes could not be obtained or decoded as UTF-8.
    #[error("could not read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// A `### File:` line is missing its backtick-quoted name.
    #[error("malformed delimiter on line {line}: expected a file name between backticks")]
    MalformedDelimiter { line: usize },

    /// The selection references a name the parser never produced.
    #[error("selection references unknown file `{0}`")]
    ContractViolation(String),

    /// The in-memory archive could not be assembled.
    #[error("failed to build archive: {0}")]
    ArchiveCreation(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, Error>;
