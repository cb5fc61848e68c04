use std::path::PathBuf;

pub const RELEASES_ROOT: &str = "https://github.com/duckdb/duckdb/releases";
pub const PREVIEW_ROOT: &str = "https://artifacts.duckdb.org/latest";

/// Upstream hosts that artifacts are downloaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Root of tagged releases. `{root}/latest` redirects to
    /// `{root}/tag/{tag}` and assets live under `{root}/download/{tag}/`.
    pub releases_root: String,
    /// Directory holding the rolling preview archives.
    pub preview_root: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            releases_root: RELEASES_ROOT.to_string(),
            preview_root: PREVIEW_ROOT.to_string(),
        }
    }
}

impl Endpoints {
    /// Endpoints with both roots under `base`, laid out as `{base}/releases`
    /// and `{base}/latest`.
    pub fn under(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            releases_root: format!("{base}/releases"),
            preview_root: format!("{base}/latest"),
        }
    }
}

/// Where a run reads from and writes to.
///
/// # Examples
///
/// ```
/// use getaduck::Settings;
///
/// let settings = Settings::default().output_dir("bin").cache_dir("/var/tmp");
/// assert_eq!(settings.output_dir, std::path::PathBuf::from("bin"));
/// ```
#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoints: Endpoints,

    /// Directory the extracted artifact is written to.
    ///
    /// Default: the current directory
    pub output_dir: PathBuf,

    /// Directory for downloaded archives, temporary and cached alike.
    ///
    /// Default: the OS temp directory
    pub cache_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            output_dir: PathBuf::from("."),
            cache_dir: std::env::temp_dir(),
        }
    }
}

impl Settings {
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }
}
