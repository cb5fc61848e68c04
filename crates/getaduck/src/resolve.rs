//! Resolution of the "latest" release tag.

use getaduck_fetch::{Fetcher, HttpClient};
use tracing::debug;

use crate::error::ResolveError;
use crate::normalize::is_url_token;

/// Find the tag of the newest release under `releases_root`.
///
/// `{releases_root}/latest` is requested with redirects disabled; the
/// release host answers with a redirect to `{releases_root}/tag/{tag}`.
pub async fn latest_tag<C: HttpClient>(
    fetcher: &Fetcher<C>,
    releases_root: &str,
) -> Result<String, ResolveError> {
    let url = format!("{releases_root}/latest");
    let probe = fetcher.probe(&url).await.map_err(ResolveError::Request)?;

    if !probe.is_redirect() {
        return Err(ResolveError::NotRedirected {
            url,
            status: probe.status,
        });
    }
    let location = probe
        .location
        .ok_or_else(|| ResolveError::MissingLocation { url: url.clone() })?;

    let prefix = format!("{releases_root}/tag/");
    let Some(tag) = location.strip_prefix(&prefix) else {
        return Err(ResolveError::UnexpectedLocation { location });
    };
    if !is_url_token(tag) {
        return Err(ResolveError::MalformedTag(tag.to_string()));
    }

    debug!("latest release is {tag}");
    Ok(tag.to_string())
}
