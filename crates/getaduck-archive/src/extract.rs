use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use zip::ZipArchive;

use crate::error::{Error, Result};

fn open(archive: &Path) -> Result<ZipArchive<BufReader<File>>> {
    let file = File::open(archive).map_err(|e| Error::Open {
        path: archive.to_path_buf(),
        source: e.into(),
    })?;
    ZipArchive::new(BufReader::new(file)).map_err(|source| Error::Open {
        path: archive.to_path_buf(),
        source,
    })
}

fn names<R: io::Read + io::Seek>(zip: &mut ZipArchive<R>, archive: &Path) -> Result<Vec<String>> {
    (0..zip.len())
        .map(|i| {
            zip.by_index_raw(i)
                .map(|file| file.name().to_string())
                .map_err(|source| Error::Read {
                    entry: format!("#{i}"),
                    archive: archive.to_path_buf(),
                    source,
                })
        })
        .collect()
}

/// Names of all entries in `archive`, in central directory order.
pub fn entry_names(archive: impl AsRef<Path>) -> Result<Vec<String>> {
    let archive = archive.as_ref();
    let mut zip = open(archive)?;
    names(&mut zip, archive)
}

/// Extract the entry called `name` from `archive` into `destination`.
///
/// The entry lands at `destination/name`, replacing any existing file, with
/// the entry's recorded permission bits. When several entries share the
/// name the last one wins. Returns the path of the written file.
pub fn extract_entry(
    archive: impl AsRef<Path>,
    name: &str,
    destination: impl AsRef<Path>,
) -> Result<PathBuf> {
    let archive = archive.as_ref();
    let mut zip = open(archive)?;
    let available = names(&mut zip, archive)?;

    let Some(index) = available.iter().rposition(|n| n == name) else {
        return Err(Error::EntryNotFound {
            entry: name.to_string(),
            archive: archive.to_path_buf(),
            available,
        });
    };

    let mut file = zip.by_index(index).map_err(|source| Error::Read {
        entry: name.to_string(),
        archive: archive.to_path_buf(),
        source,
    })?;
    let relative = file
        .enclosed_name()
        .ok_or_else(|| Error::InvalidPath(name.to_string()))?;
    let target = destination.as_ref().join(relative);

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| Error::DirectoryCreationFailed {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    let extraction_failed = |source| Error::ExtractionFailed {
        path: target.clone(),
        source,
    };
    let mut out = File::create(&target).map_err(extraction_failed)?;
    let written = io::copy(&mut file, &mut out).map_err(extraction_failed)?;
    drop(out);
    apply_mode(&target, file.unix_mode()).map_err(extraction_failed)?;

    debug!(
        "extracted {name} ({written} bytes) from {} to {}",
        archive.display(),
        target.display()
    );
    Ok(target)
}

/// Extract `name` from the zip stored as entry `inner` of `archive`.
///
/// The inner zip is written to `destination` first and removed afterwards,
/// whether or not the second extraction succeeds.
pub fn extract_nested(
    archive: impl AsRef<Path>,
    inner: &str,
    name: &str,
    destination: impl AsRef<Path>,
) -> Result<PathBuf> {
    let archive = archive.as_ref();
    let destination = destination.as_ref();

    let inner_path = extract_entry(archive, inner, destination).map_err(|e| Error::ExtractInner {
        inner: inner.to_string(),
        outer: archive.to_path_buf(),
        source: Box::new(e),
    })?;
    let inner_zip = RemoveOnDrop(inner_path);

    extract_entry(&inner_zip.0, name, destination).map_err(|e| Error::ExtractFromInner {
        entry: name.to_string(),
        inner: inner.to_string(),
        source: Box::new(e),
    })
}

struct RemoveOnDrop(PathBuf);

impl Drop for RemoveOnDrop {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.0) {
            warn!("failed to remove {}: {e}", self.0.display());
        }
    }
}

#[cfg(unix)]
fn apply_mode(path: &Path, mode: Option<u32>) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    match mode {
        Some(mode) => std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode & 0o7777)),
        None => Ok(()),
    }
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: Option<u32>) -> io::Result<()> {
    Ok(())
}
