//! Canonical form of an [`ArtifactSpec`].
//!
//! Upstream naming has a few historical quirks that are applied here:
//!
//! - macOS archives are named `osx` and only ship as `universal` builds.
//! - Versions are tags with a `v` prefix; `1.2.2` means `v1.2.2`.
//! - 64-bit ARM was called `aarch64` before `v1.3.0` and `arm64` since.

use getaduck_fetch::{Fetcher, HttpClient};
use getaduck_version::{Tag, is_valid};
use tracing::debug;

use crate::error::{Error, Result};
use crate::resolve;
use crate::settings::Endpoints;
use crate::spec::{ArtifactSpec, LATEST};

/// First release whose ARM archives use `arm64` instead of `aarch64`.
fn arm64_since() -> Tag {
    Tag::new(1, 3, 0)
}

/// Whether `s` can be placed in a URL path segment or file name as is.
pub(crate) fn is_url_token(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-'))
}

fn field(name: &'static str, value: &str) -> Result<String> {
    let value = value.trim().to_ascii_lowercase();
    let reason = if value.is_empty() {
        "must not be empty"
    } else if !is_url_token(&value) {
        "may only contain letters, digits, '.', '_', '+' and '-'"
    } else {
        return Ok(value);
    };
    Err(Error::Validation {
        field: name,
        value,
        reason,
    })
}

/// Lower-case and validate `version`, `os` and `arch`, and rename `darwin`
/// to `osx`.
///
/// On `osx` the arch is always `universal`, whatever was requested.
/// This stage needs no network access and already determines
/// [`ArtifactSpec::entry_name`].
pub fn prepare(spec: &ArtifactSpec) -> Result<ArtifactSpec> {
    let mut os = field("os", &spec.os)?;
    if os == "darwin" {
        os = "osx".to_string();
    }
    let arch = if os == "osx" {
        "universal".to_string()
    } else {
        field("arch", &spec.arch)?
    };
    Ok(ArtifactSpec {
        version: field("version", &spec.version)?,
        os,
        arch,
        ..spec.clone()
    })
}

/// Apply every naming rule that does not depend on the network.
///
/// A [`LATEST`] version is left as is; see [`normalize`].
pub fn canonicalize(spec: &ArtifactSpec) -> Result<ArtifactSpec> {
    let mut spec = prepare(spec)?;

    if !is_valid(&spec.version) {
        let prefixed = format!("v{}", spec.version);
        if is_valid(&prefixed) {
            spec.version = prefixed;
        }
    }

    if spec.arch == "arm64"
        && let Ok(tag) = Tag::parse(&spec.version)
        && tag < arm64_since()
    {
        spec.arch = "aarch64".to_string();
    }

    Ok(spec)
}

/// Turn `spec` into the concrete form used to build download URLs.
///
/// A [`LATEST`] version is replaced by the newest release tag, which costs
/// one request to `endpoints.releases_root`.
pub async fn normalize<C: HttpClient>(
    spec: &ArtifactSpec,
    fetcher: &Fetcher<C>,
    endpoints: &Endpoints,
) -> Result<ArtifactSpec> {
    let mut spec = prepare(spec)?;
    if spec.version == LATEST {
        spec.version = resolve::latest_tag(fetcher, &endpoints.releases_root).await?;
    }
    let spec = canonicalize(&spec)?;
    debug!(
        "normalized spec: {} {} {}-{}",
        spec.kind, spec.version, spec.os, spec.arch
    );
    Ok(spec)
}
