use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Resolution(#[from] ResolveError),

    #[error("invalid {field} '{value}': {reason}")]
    Validation {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error(transparent)]
    Fetch(#[from] getaduck_fetch::Error),

    #[error(transparent)]
    Archive(#[from] getaduck_archive::Error),
}

/// Failure to turn "latest" into a concrete release tag.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to resolve latest release: {0}")]
    Request(#[source] getaduck_fetch::Error),

    #[error("redirect expected for {url} but got code {status}")]
    NotRedirected { url: String, status: u16 },

    #[error("redirect from {url} has no location")]
    MissingLocation { url: String },

    #[error("unexpected release redirect location: {location}")]
    UnexpectedLocation { location: String },

    #[error("malformed release tag '{0}'")]
    MalformedTag(String),
}
