//! Architecture detection.

/// CPU architecture types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86,
    X86_64,
    Arm,
    Arm64,
    Other(&'static str),
}

impl Arch {
    fn from_target(target: &'static str) -> Self {
        match target {
            "x86" => Arch::X86,
            "x86_64" => Arch::X86_64,
            "arm" => Arch::Arm,
            "aarch64" => Arch::Arm64,
            other => Arch::Other(other),
        }
    }

    /// Name used in release archive file names.
    ///
    /// Releases before v1.3.0 call 64-bit ARM `aarch64`; that rename is
    /// version dependent and left to the caller.
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X86 => "386",
            Arch::X86_64 => "amd64",
            Arch::Arm => "arm",
            Arch::Arm64 => "arm64",
            Arch::Other(name) => name,
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect current architecture.
pub fn detect() -> Arch {
    Arch::from_target(std::env::consts::ARCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_names() {
        assert_eq!(Arch::from_target("x86_64").as_str(), "amd64");
        assert_eq!(Arch::from_target("aarch64").as_str(), "arm64");
        assert_eq!(Arch::from_target("riscv64").as_str(), "riscv64");
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_detect_x86_64() {
        assert_eq!(detect(), Arch::X86_64);
    }
}
