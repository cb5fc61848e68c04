use getaduck_platform::Platform;

/// Symbolic version resolved to the newest tagged release.
pub const LATEST: &str = "latest";

/// Symbolic version selecting the rolling preview build.
pub const PREVIEW: &str = "preview";

/// Which DuckDB binary to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinaryKind {
    /// The shared library (`libduckdb`).
    #[default]
    Library,
    /// The command line shell (`duckdb`).
    Cli,
}

impl BinaryKind {
    /// Archive name prefix used by upstream release assets.
    pub fn prefix(self) -> &'static str {
        match self {
            BinaryKind::Library => "libduckdb",
            BinaryKind::Cli => "duckdb_cli",
        }
    }

    /// Name of the file inside the archive for the given (normalized) OS.
    pub fn entry_name(self, os: &str) -> &'static str {
        match (self, os) {
            (BinaryKind::Library, "windows") => "duckdb.dll",
            (BinaryKind::Library, "osx") => "libduckdb.dylib",
            (BinaryKind::Library, _) => "libduckdb.so",
            (BinaryKind::Cli, "windows") => "duckdb.exe",
            (BinaryKind::Cli, _) => "duckdb",
        }
    }

    /// `{prefix}-{os}-{arch}.zip`
    pub fn archive_name(self, os: &str, arch: &str) -> String {
        format!("{}-{os}-{arch}.zip", self.prefix())
    }
}

impl std::fmt::Display for BinaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryKind::Library => write!(f, "lib"),
            BinaryKind::Cli => write!(f, "cli"),
        }
    }
}

/// A request for one DuckDB binary.
///
/// Values are plain data; [`crate::normalize()`] produces a new, canonical
/// spec rather than modifying this one.
///
/// # Examples
///
/// ```
/// use getaduck::{ArtifactSpec, BinaryKind};
///
/// let spec = ArtifactSpec::default()
///     .kind(BinaryKind::Cli)
///     .version("1.2.2")
///     .platform("linux", "amd64");
/// assert_eq!(spec.entry_name(), "duckdb");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    pub kind: BinaryKind,
    /// Bare or `v`-prefixed version, [`LATEST`] or [`PREVIEW`].
    pub version: String,
    pub os: String,
    pub arch: String,
    /// Keep the downloaded archive under a validator-keyed name for reuse.
    pub use_cache: bool,
    /// Download even when the output file already exists.
    pub overwrite: bool,
}

impl Default for ArtifactSpec {
    /// The library for the latest release on the host platform.
    fn default() -> Self {
        let host = Platform::host();
        Self {
            kind: BinaryKind::default(),
            version: LATEST.to_string(),
            os: host.os.to_string(),
            arch: host.arch.to_string(),
            use_cache: false,
            overwrite: false,
        }
    }
}

impl ArtifactSpec {
    pub fn kind(mut self, kind: BinaryKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn platform(mut self, os: impl Into<String>, arch: impl Into<String>) -> Self {
        self.os = os.into();
        self.arch = arch.into();
        self
    }

    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn is_preview(&self) -> bool {
        self.version == PREVIEW
    }

    /// File name the artifact is extracted to.
    pub fn entry_name(&self) -> &'static str {
        self.kind.entry_name(&self.os)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_names() {
        let cases = [
            (BinaryKind::Library, "windows", "duckdb.dll"),
            (BinaryKind::Library, "osx", "libduckdb.dylib"),
            (BinaryKind::Library, "linux", "libduckdb.so"),
            (BinaryKind::Library, "freebsd", "libduckdb.so"),
            (BinaryKind::Cli, "windows", "duckdb.exe"),
            (BinaryKind::Cli, "osx", "duckdb"),
            (BinaryKind::Cli, "linux", "duckdb"),
        ];
        for (kind, os, expected) in cases {
            assert_eq!(kind.entry_name(os), expected, "{kind} on {os}");
        }
    }

    #[test]
    fn test_archive_name() {
        assert_eq!(
            BinaryKind::Cli.archive_name("windows", "amd64"),
            "duckdb_cli-windows-amd64.zip"
        );
        assert_eq!(
            BinaryKind::Library.archive_name("linux", "aarch64"),
            "libduckdb-linux-aarch64.zip"
        );
    }

    #[test]
    fn test_default_spec() {
        let spec = ArtifactSpec::default();
        assert_eq!(spec.kind, BinaryKind::Library);
        assert_eq!(spec.version, LATEST);
        assert!(!spec.use_cache);
        assert!(!spec.overwrite);
        assert!(!spec.os.is_empty());
        assert!(!spec.arch.is_empty());
    }
}
