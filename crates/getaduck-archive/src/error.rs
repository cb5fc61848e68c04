use std::io;
use std::path::PathBuf;

use zip::result::ZipError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not open zip {path}: {source}")]
    Open { path: PathBuf, source: ZipError },

    #[error("did not find expected file {entry} in {archive}, entries: {available:?}")]
    EntryNotFound {
        entry: String,
        archive: PathBuf,
        available: Vec<String>,
    },

    #[error("failed to read entry '{entry}' from {archive}: {source}")]
    Read {
        entry: String,
        archive: PathBuf,
        source: ZipError,
    },

    #[error("entry '{0}' resolves outside the destination directory")]
    InvalidPath(String),

    #[error("failed to extract '{path}': {source}")]
    ExtractionFailed { path: PathBuf, source: io::Error },

    #[error("failed to create directory: {path}: {source}")]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    #[error("failed to extract inner zip '{inner}' from '{outer}': {source}")]
    ExtractInner {
        inner: String,
        outer: PathBuf,
        source: Box<Error>,
    },

    #[error("failed to extract entry '{entry}' from inner zip '{inner}': {source}")]
    ExtractFromInner {
        entry: String,
        inner: String,
        source: Box<Error>,
    },
}

impl Error {
    /// The innermost error, looking through nested-extraction context.
    pub fn root(&self) -> &Error {
        match self {
            Self::ExtractInner { source, .. } | Self::ExtractFromInner { source, .. } => {
                source.root()
            }
            other => other,
        }
    }

    /// Entry names present in the archive, when the requested entry was missing.
    pub fn available_entries(&self) -> Option<&[String]> {
        match self.root() {
            Self::EntryNotFound { available, .. } => Some(available),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
