use std::path::{Path, PathBuf};

use getaduck_archive::{extract_entry, extract_nested};
use getaduck_fetch::{Fetcher, HttpClient, ReqwestClient};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::locate::Location;
use crate::normalize::{normalize, prepare};
use crate::settings::Settings;
use crate::spec::ArtifactSpec;

/// Result of a [`Downloader::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Path of the extracted artifact.
    pub output_file: PathBuf,
    /// `false` when an existing file was kept instead of downloading.
    pub written: bool,
}

/// Resolves, downloads and extracts DuckDB binaries.
pub struct Downloader<C: HttpClient> {
    fetcher: Fetcher<C>,
    settings: Settings,
}

impl Downloader<ReqwestClient> {
    pub fn new(settings: Settings) -> Result<Self> {
        Ok(Self::with_client(ReqwestClient::new()?, settings))
    }
}

impl<C: HttpClient> Downloader<C> {
    pub fn with_client(client: C, settings: Settings) -> Self {
        Self {
            fetcher: Fetcher::new(client, settings.cache_dir.clone()),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// See [`crate::normalize()`].
    pub async fn normalize(&self, spec: &ArtifactSpec) -> Result<ArtifactSpec> {
        normalize(spec, &self.fetcher, &self.settings.endpoints).await
    }

    /// Make the artifact described by `spec` available in the output
    /// directory.
    ///
    /// Unless `spec.overwrite` is set, an existing regular file with the
    /// artifact's name is kept and nothing is requested over the network.
    pub async fn run(&self, spec: &ArtifactSpec) -> Result<Outcome> {
        let prepared = prepare(spec)?;
        let output_file = self.settings.output_dir.join(prepared.entry_name());

        if !prepared.overwrite && is_regular_file(&output_file) {
            debug!("{} exists, skipping download", output_file.display());
            return Ok(Outcome {
                output_file,
                written: false,
            });
        }

        let spec = self.normalize(&prepared).await?;
        let location = Location::of(&spec, &self.settings.endpoints);
        info!("downloading {}", location.url());

        let fetched = self.fetcher.fetch(location.url(), spec.use_cache).await?;
        let destination = &self.settings.output_dir;
        let extracted = match &location {
            Location::Release { entry, .. } => extract_entry(fetched.path(), entry, destination),
            Location::Preview { inner, entry, .. } => {
                extract_nested(fetched.path(), inner, entry, destination)
            }
        };

        let archive = fetched.path().to_path_buf();
        if let Err(e) = fetched.cleanup() {
            warn!("failed to remove {}: {e}", archive.display());
        }

        Ok(Outcome {
            output_file: extracted?,
            written: true,
        })
    }
}

/// Download the artifact described by `spec` over HTTPS.
///
/// # Examples
///
/// ```no_run
/// use getaduck::{ArtifactSpec, BinaryKind, Settings};
///
/// # async fn example() -> getaduck::Result<()> {
/// let spec = ArtifactSpec::default().kind(BinaryKind::Cli).version("1.2.2");
/// let outcome = getaduck::run(&spec, Settings::default()).await?;
/// println!("{}", outcome.output_file.display());
/// # Ok(())
/// # }
/// ```
pub async fn run(spec: &ArtifactSpec, settings: Settings) -> Result<Outcome> {
    Downloader::new(settings)?.run(spec).await
}

fn is_regular_file(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| m.is_file())
}
