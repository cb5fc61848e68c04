use std::io;
use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use tempfile::TempPath;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::cache;
use crate::error::{Error, Result};
use crate::http::{HttpClient, Probe, Response};

const TEMP_PREFIX: &str = "getaduck";
const TEMP_SUFFIX: &str = ".zip";

/// A downloaded archive on local disk.
///
/// Temporary archives are deleted when this value is dropped (or earlier
/// with [`Fetched::cleanup`]); cached archives stay for later runs.
#[derive(Debug)]
pub struct Fetched {
    location: Location,
}

#[derive(Debug)]
enum Location {
    Temporary(TempPath),
    Cached(PathBuf),
}

impl Fetched {
    pub fn path(&self) -> &Path {
        match &self.location {
            Location::Temporary(path) => &**path,
            Location::Cached(path) => path.as_path(),
        }
    }

    /// Whether the archive lives under a validator-keyed cache name.
    pub fn is_cached(&self) -> bool {
        matches!(self.location, Location::Cached(_))
    }

    /// Delete the archive if it is temporary.
    pub fn cleanup(self) -> io::Result<()> {
        match self.location {
            Location::Temporary(path) => path.close(),
            Location::Cached(_) => Ok(()),
        }
    }
}

/// Downloads archives with a single GET request.
pub struct Fetcher<C: HttpClient> {
    client: C,
    cache_dir: PathBuf,
}

impl<C: HttpClient> Fetcher<C> {
    /// Create a fetcher storing temporary and cached archives in `cache_dir`.
    pub fn new(client: C, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Send a HEAD request to `url` without following redirects.
    pub async fn probe(&self, url: &str) -> Result<Probe> {
        self.client
            .probe(url)
            .await
            .map_err(|e| Error::transport(url, e))
    }

    /// Download `url` to local disk.
    ///
    /// With `use_cache` and a non-blank `ETag` in the response, the archive
    /// is stored under a name derived from the validator, and an existing
    /// file of that name whose size equals the declared `Content-Length` is
    /// returned without reading the body. Otherwise the body goes to a new
    /// temporary file.
    pub async fn fetch(&self, url: &str, use_cache: bool) -> Result<Fetched> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .await
            .map_err(|e| Error::transport(url, e))?;

        if response.status != 200 {
            return Err(Error::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        let validator = if use_cache {
            cache::usable_validator(response.validator.as_deref()).map(str::to_string)
        } else {
            None
        };

        let Some(validator) = validator else {
            let path = self.download_to_temp(url, response).await?;
            return Ok(Fetched {
                location: Location::Temporary(path),
            });
        };

        let cache_path = cache::path_in(&self.cache_dir, &validator);
        if let Some(expected) = response.content_length {
            if let Ok(metadata) = tokio::fs::metadata(&cache_path).await {
                if metadata.is_file() && metadata.len() == expected {
                    info!("using cached archive {}", cache_path.display());
                    return Ok(Fetched {
                        location: Location::Cached(cache_path),
                    });
                }
            }
        }

        let staged = self.download_to_temp(url, response).await?;
        staged.persist(&cache_path).map_err(|e| Error::Write {
            path: cache_path.clone(),
            source: e.error,
        })?;
        debug!("cached {url} as {}", cache_path.display());

        Ok(Fetched {
            location: Location::Cached(cache_path),
        })
    }

    async fn download_to_temp(&self, url: &str, response: Response<C::Error>) -> Result<TempPath> {
        let staging = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(TEMP_SUFFIX)
            .tempfile_in(&self.cache_dir)
            .map_err(|e| Error::TempFile {
                dir: self.cache_dir.clone(),
                source: e,
            })?;
        let (file, path) = staging.into_parts();
        let mut file = tokio::fs::File::from_std(file);
        let write_err = |source| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut body = response.body;
        let mut bytes_downloaded = 0u64;
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| Error::transport(url, e))?;
            file.write_all(&chunk).await.map_err(write_err)?;
            bytes_downloaded += chunk.len() as u64;
        }
        file.flush().await.map_err(write_err)?;
        file.sync_all().await.map_err(write_err)?;
        drop(file);

        debug!("downloaded {bytes_downloaded} bytes from {url}");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use futures_util::stream;

    struct StubClient {
        status: u16,
        validator: Option<&'static str>,
        body: &'static [u8],
    }

    impl HttpClient for StubClient {
        type Error = io::Error;

        async fn get(&self, _url: &str) -> std::result::Result<Response<io::Error>, io::Error> {
            let chunks: Vec<std::result::Result<Bytes, io::Error>> =
                vec![Ok(Bytes::from_static(self.body))];
            Ok(Response {
                status: self.status,
                validator: self.validator.map(str::to_string),
                content_length: Some(self.body.len() as u64),
                body: Box::pin(stream::iter(chunks)),
            })
        }

        async fn probe(&self, _url: &str) -> std::result::Result<Probe, io::Error> {
            Ok(Probe {
                status: self.status,
                location: None,
            })
        }
    }

    struct FailingBody;

    impl HttpClient for FailingBody {
        type Error = io::Error;

        async fn get(&self, _url: &str) -> std::result::Result<Response<io::Error>, io::Error> {
            let chunks: Vec<std::result::Result<Bytes, io::Error>> = vec![
                Ok(Bytes::from_static(b"partial")),
                Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset")),
            ];
            Ok(Response {
                status: 200,
                validator: Some("\"etag\"".to_string()),
                content_length: Some(100),
                body: Box::pin(stream::iter(chunks)),
            })
        }

        async fn probe(&self, _url: &str) -> std::result::Result<Probe, io::Error> {
            Err(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"))
        }
    }

    #[tokio::test]
    async fn test_empty_etag_uses_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = Fetcher::new(
            StubClient {
                status: 200,
                validator: Some(""),
                body: b"",
            },
            dir.path(),
        );

        let fetched = fetcher.fetch("http://stub/a.zip", true).await.unwrap();
        assert!(!fetched.is_cached());
        let name = fetched.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(!name.contains("etag"));

        let path = fetched.path().to_path_buf();
        assert!(path.exists());
        fetched.cleanup().unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_cache_declined_ignores_validator() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = Fetcher::new(
            StubClient {
                status: 200,
                validator: Some("\"abc\""),
                body: b"zipbytes",
            },
            dir.path(),
        );

        let fetched = fetcher.fetch("http://stub/a.zip", false).await.unwrap();
        assert!(!fetched.is_cached());
        assert_eq!(std::fs::read(fetched.path()).unwrap(), b"zipbytes");
        assert!(!cache::path_in(dir.path(), "\"abc\"").exists());
    }

    #[tokio::test]
    async fn test_temp_file_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = Fetcher::new(
            StubClient {
                status: 200,
                validator: None,
                body: b"zipbytes",
            },
            dir.path(),
        );

        let fetched = fetcher.fetch("http://stub/a.zip", true).await.unwrap();
        let path = fetched.path().to_path_buf();
        drop(fetched);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_non_200_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = Fetcher::new(
            StubClient {
                status: 404,
                validator: None,
                body: b"not found",
            },
            dir.path(),
        );

        let err = fetcher.fetch("http://stub/a.zip", false).await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 404, .. }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_broken_body_leaves_no_cache_file() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = Fetcher::new(FailingBody, dir.path());

        let err = fetcher.fetch("http://stub/a.zip", true).await.unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
        assert!(!cache::path_in(dir.path(), "\"etag\"").exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_probe_transport_error() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = Fetcher::new(FailingBody, dir.path());
        let err = fetcher.probe("http://stub/latest").await.unwrap_err();
        assert!(err.to_string().contains("http://stub/latest"));
    }
}
