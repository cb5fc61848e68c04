//! Host platform detection, spelled the way DuckDB names its release archives.

pub use arch::Arch;
pub use os::Os;

pub mod arch;
pub mod os;

/// Operating system and architecture pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn host() -> Self {
        Self {
            os: os::detect(),
            arch: arch::detect(),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
