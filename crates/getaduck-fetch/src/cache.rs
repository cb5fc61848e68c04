//! Cache file naming.
//!
//! A cached archive is named after the validator (`ETag`) the server sent
//! with it, so a changed upstream artifact gets a new file name. Whether an
//! existing file is reused is decided by comparing its size with the
//! declared `Content-Length` only; a server that replaces content without
//! changing its length or validator is not detected.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

const PREFIX: &str = "getaduck-etag-";

/// File name for the archive identified by `validator`.
///
/// Validators are opaque and may contain quotes or slashes, so the name is
/// derived from their SHA-256 digest.
pub fn file_name(validator: &str) -> String {
    let digest = Sha256::digest(validator.as_bytes());
    format!("{PREFIX}{}.zip", hex::encode(digest))
}

pub fn path_in(dir: &Path, validator: &str) -> PathBuf {
    dir.join(file_name(validator))
}

/// Returns the validator unless it is missing or blank.
pub(crate) fn usable_validator(validator: Option<&str>) -> Option<&str> {
    validator.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_deterministic() {
        assert_eq!(file_name("\"abc\""), file_name("\"abc\""));
        assert_ne!(file_name("\"abc\""), file_name("\"abd\""));
    }

    #[test]
    fn test_file_name_is_path_safe() {
        let name = file_name("W/\"0x8DC/../..\"");
        assert!(name.starts_with(PREFIX));
        assert!(name.ends_with(".zip"));
        assert!(!name.contains('/'));
        assert!(!name.contains('"'));
    }

    #[test]
    fn test_blank_validator_is_ignored() {
        assert_eq!(usable_validator(None), None);
        assert_eq!(usable_validator(Some("")), None);
        assert_eq!(usable_validator(Some("  ")), None);
        assert_eq!(usable_validator(Some("\"v1\"")), Some("\"v1\""));
    }
}
