//! Download a prebuilt DuckDB shared library or CLI.
//!
//! # Pipeline
//!
//! 1. [`normalize()`] - canonical version, OS and architecture names, with
//!    "latest" resolved through the release host's redirect
//! 2. [`Location`] - release or preview archive URL and the entry to extract
//! 3. [`getaduck_fetch::Fetcher`] - single GET into a temporary or cached file
//! 4. [`getaduck_archive`] - extraction of the entry, one or two zips deep
//!
//! [`Downloader`] runs the whole pipeline; [`run`] does so with the default
//! HTTPS client.

mod download;
mod error;
mod locate;
mod normalize;
mod resolve;
mod settings;
mod spec;

pub use download::{Downloader, Outcome, run};
pub use error::{Error, ResolveError, Result};
pub use locate::Location;
pub use normalize::{canonicalize, normalize, prepare};
pub use resolve::latest_tag;
pub use settings::{Endpoints, PREVIEW_ROOT, RELEASES_ROOT, Settings};
pub use spec::{ArtifactSpec, BinaryKind, LATEST, PREVIEW};
