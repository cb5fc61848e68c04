use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use getaduck::{ArtifactSpec, BinaryKind, LATEST, Outcome, Settings};
use getaduck_platform::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BinType {
    /// Shared library
    Lib,
    /// Command line shell
    Cli,
}

impl From<BinType> for BinaryKind {
    fn from(value: BinType) -> Self {
        match value {
            BinType::Lib => BinaryKind::Library,
            BinType::Cli => BinaryKind::Cli,
        }
    }
}

/// Download a prebuilt DuckDB shared library or CLI.
#[derive(Debug, Parser)]
#[command(name = "getaduck")]
pub(crate) struct Cli {
    /// Binary to download
    #[arg(long = "type", value_enum, default_value_t = BinType::Lib, env = "GETADUCK_TYPE")]
    pub bin_type: BinType,

    /// DuckDB version, "latest" or "preview"
    #[arg(long, default_value = LATEST, env = "GETADUCK_VERSION")]
    pub version: String,

    /// Target operating system (linux, osx, windows)
    #[arg(long, default_value_t = Platform::host().os.to_string(), env = "GETADUCK_OS")]
    pub os: String,

    /// Target architecture (amd64, arm64, ...)
    #[arg(long, default_value_t = Platform::host().arch.to_string(), env = "GETADUCK_ARCH")]
    pub arch: String,

    /// Replace the output file if it already exists
    #[arg(long, default_value_t = true, action = ArgAction::Set, env = "GETADUCK_OVERWRITE")]
    pub overwrite: bool,

    /// Keep the downloaded archive for reuse, keyed by its ETag
    #[arg(long, env = "GETADUCK_CACHE")]
    pub cache: bool,

    /// Directory to write the binary to
    #[arg(long, default_value = ".", env = "GETADUCK_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Directory for downloaded archives [default: system temp dir]
    #[arg(long, env = "GETADUCK_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Log debug messages
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn spec(&self) -> ArtifactSpec {
        ArtifactSpec::default()
            .kind(self.bin_type.into())
            .version(self.version.clone())
            .platform(self.os.clone(), self.arch.clone())
            .overwrite(self.overwrite)
            .use_cache(self.cache)
    }

    pub fn settings(&self) -> Settings {
        let settings = Settings::default().output_dir(self.output_dir.clone());
        match &self.cache_dir {
            Some(dir) => settings.cache_dir(dir.clone()),
            None => settings,
        }
    }
}

/// Result line printed after a run, naming `path` (the absolute output file).
pub(crate) fn summary(outcome: &Outcome, path: &Path) -> String {
    if outcome.written {
        format!("downloaded: {}", path.display())
    } else {
        format!("already exists: {}", path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "getaduck",
            "--type",
            "cli",
            "--version",
            "1.2.2",
            "--os",
            "windows",
            "--arch",
            "amd64",
            "--overwrite",
            "false",
            "--cache",
            "--output-dir",
            "bin",
        ])
        .unwrap();

        let spec = cli.spec();
        assert_eq!(spec.kind, BinaryKind::Cli);
        assert_eq!(spec.version, "1.2.2");
        assert_eq!(spec.os, "windows");
        assert_eq!(spec.arch, "amd64");
        assert!(!spec.overwrite);
        assert!(spec.use_cache);
        assert_eq!(cli.settings().output_dir, PathBuf::from("bin"));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["getaduck"]).unwrap();
        let spec = cli.spec();
        assert_eq!(spec.kind, BinaryKind::Library);
        assert_eq!(spec.version, LATEST);
        assert!(spec.overwrite);
        assert!(!spec.use_cache);
        assert_eq!(cli.settings().cache_dir, std::env::temp_dir());
    }

    #[test]
    fn test_summary() {
        let path = Path::new("/work/libduckdb.so");
        let written = Outcome {
            output_file: path.to_path_buf(),
            written: true,
        };
        assert_eq!(summary(&written, path), "downloaded: /work/libduckdb.so");

        let kept = Outcome {
            written: false,
            ..written
        };
        assert_eq!(summary(&kept, path), "already exists: /work/libduckdb.so");
    }
}
