//! HTTP archive downloads for getaduck.
//!
//! # Architecture
//!
//! - [`HttpClient`] - minimal async client abstraction (GET and a redirect probe)
//! - [`Fetcher`] - single-attempt download into a temporary or cached file
//! - [`cache`] - validator-keyed cache file naming
//!
//! There is no retry and no checksum verification: one request either
//! produces a file on disk or an [`Error`].

pub mod cache;
mod error;
mod fetcher;
mod http;

pub use error::{Error, Result};
pub use fetcher::{Fetched, Fetcher};
pub use http::{BoxStream, HttpClient, Probe, Response};

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
