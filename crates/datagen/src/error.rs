//! Error types for file generation and processing.
//!
//! Every failure is terminal for the call that raised it; nothing is retried
//! internally. Callers branch on [`Error::kind`] to tell a missing or unusable
//! raw file apart from a genuine internal fault.
//!
//! ## Error Cases
//! - `SinkWrite`: the raw file could not be opened, written or flushed.
//! - `SourceNotFound`: the raw file does not exist.
//! - `SourceEmpty`: the raw file is empty or whitespace only.
//! - `SourceRead`: the raw file exists but could not be read.
//! - `OutputWrite`: the output directory or document could not be written.
//! - `Unknown`: anything else, such as a serialization failure.

use std::io;
use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for [`crate::generate`] and [`crate::process`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Writing the generated file failed.
    #[error("Failed to write raw file: {0}")]
    SinkWrite(#[source] io::Error),

    /// The raw file to process does not exist.
    #[error("File does not exist: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The raw file holds nothing but whitespace.
    #[error("File is empty: {}", path.display())]
    SourceEmpty { path: PathBuf },

    /// Reading the raw file failed.
    #[error("Failed to read raw file: {0}")]
    SourceRead(#[source] io::Error),

    /// Creating the output directory or writing the document failed.
    #[error("Failed to write output file: {0}")]
    OutputWrite(#[source] io::Error),

    /// Catch-all for failures outside the I/O paths above.
    #[error("Unknown error: {context}")]
    Unknown { context: String },
}

/// Coarse classification of an [`Error`], used to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input the operation depends on is missing.
    NotFound,
    /// The input exists but cannot be processed.
    BadInput,
    /// Any other failure.
    Internal,
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceNotFound { .. } => ErrorKind::NotFound,
            Self::SourceEmpty { .. } => ErrorKind::BadInput,
            Self::SinkWrite(_)
            | Self::SourceRead(_)
            | Self::OutputWrite(_)
            | Self::Unknown { .. } => ErrorKind::Internal,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Unknown {
            context: format!("serialization failed: {err}"),
        }
    }
}
