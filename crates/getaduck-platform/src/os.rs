//! Operating system detection.

/// Operating system families with a distinct archive name upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Windows,
    Macos,
    Linux,
    Other(&'static str),
}

impl Os {
    fn from_target(target: &'static str) -> Self {
        match target {
            "windows" => Os::Windows,
            "macos" => Os::Macos,
            "linux" => Os::Linux,
            other => Os::Other(other),
        }
    }

    /// Name used in release archive file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Windows => "windows",
            Os::Macos => "osx",
            Os::Linux => "linux",
            Os::Other(name) => name,
        }
    }
}

impl std::fmt::Display for Os {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect current operating system.
pub fn detect() -> Os {
    Os::from_target(std::env::consts::OS)
}
