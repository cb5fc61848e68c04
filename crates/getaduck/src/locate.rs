use crate::settings::Endpoints;
use crate::spec::ArtifactSpec;

/// Where a normalized spec is downloaded from, and what to take out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A tagged release archive containing the artifact directly.
    Release { url: String, entry: String },
    /// A preview archive bundling one zip per binary kind and architecture;
    /// the artifact sits inside the `inner` zip.
    Preview {
        url: String,
        inner: String,
        entry: String,
    },
}

impl Location {
    /// Locate `spec`, which must already be normalized.
    pub fn of(spec: &ArtifactSpec, endpoints: &Endpoints) -> Self {
        if spec.is_preview() {
            preview(spec, &endpoints.preview_root)
        } else {
            release(spec, &endpoints.releases_root)
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Location::Release { url, .. } | Location::Preview { url, .. } => url,
        }
    }

    pub fn entry(&self) -> &str {
        match self {
            Location::Release { entry, .. } | Location::Preview { entry, .. } => entry,
        }
    }
}

/// `{root}/download/{version}/{prefix}-{os}-{arch}.zip`
pub fn release(spec: &ArtifactSpec, releases_root: &str) -> Location {
    let archive = spec.kind.archive_name(&spec.os, &spec.arch);
    Location::Release {
        url: format!("{releases_root}/download/{}/{archive}", spec.version),
        entry: spec.entry_name().to_string(),
    }
}

/// `{root}/duckdb-binaries-{os}.zip`, with `-{arch}` appended to the OS on
/// Linux only.
pub fn preview(spec: &ArtifactSpec, preview_root: &str) -> Location {
    let arch_suffix = if spec.os == "linux" {
        format!("-{}", spec.arch)
    } else {
        String::new()
    };
    Location::Preview {
        url: format!("{preview_root}/duckdb-binaries-{}{arch_suffix}.zip", spec.os),
        inner: spec.kind.archive_name(&spec.os, &spec.arch),
        entry: spec.entry_name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::canonicalize;
    use crate::spec::BinaryKind;

    fn located(kind: BinaryKind, version: &str, os: &str, arch: &str) -> Location {
        let spec = ArtifactSpec::default()
            .kind(kind)
            .version(version)
            .platform(os, arch);
        Location::of(&canonicalize(&spec).unwrap(), &Endpoints::default())
    }

    #[test]
    fn test_release_library_linux() {
        assert_eq!(
            located(BinaryKind::Library, "1.2.2", "linux", "amd64"),
            Location::Release {
                url: "https://github.com/duckdb/duckdb/releases/download/v1.2.2/libduckdb-linux-amd64.zip"
                    .to_string(),
                entry: "libduckdb.so".to_string(),
            }
        );
    }

    #[test]
    fn test_release_old_arm() {
        let location = located(BinaryKind::Cli, "v1.1.3", "linux", "arm64");
        assert_eq!(
            location.url(),
            "https://github.com/duckdb/duckdb/releases/download/v1.1.3/duckdb_cli-linux-aarch64.zip"
        );
        assert_eq!(location.entry(), "duckdb");
    }

    #[test]
    fn test_release_macos() {
        let location = located(BinaryKind::Library, "1.4.1", "darwin", "amd64");
        assert_eq!(
            location.url(),
            "https://github.com/duckdb/duckdb/releases/download/v1.4.1/libduckdb-osx-universal.zip"
        );
        assert_eq!(location.entry(), "libduckdb.dylib");
    }

    #[test]
    fn test_preview_windows_cli() {
        assert_eq!(
            located(BinaryKind::Cli, "preview", "windows", "amd64"),
            Location::Preview {
                url: "https://artifacts.duckdb.org/latest/duckdb-binaries-windows.zip".to_string(),
                inner: "duckdb_cli-windows-amd64.zip".to_string(),
                entry: "duckdb.exe".to_string(),
            }
        );
    }

    #[test]
    fn test_preview_linux_has_arch_suffix() {
        assert_eq!(
            located(BinaryKind::Library, "preview", "linux", "arm64"),
            Location::Preview {
                url: "https://artifacts.duckdb.org/latest/duckdb-binaries-linux-arm64.zip"
                    .to_string(),
                inner: "libduckdb-linux-arm64.zip".to_string(),
                entry: "libduckdb.so".to_string(),
            }
        );
    }

    #[test]
    fn test_preview_osx() {
        let location = located(BinaryKind::Library, "preview", "osx", "arm64");
        assert_eq!(
            location.url(),
            "https://artifacts.duckdb.org/latest/duckdb-binaries-osx.zip"
        );
    }
}
