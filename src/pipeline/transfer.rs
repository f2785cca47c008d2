//! File download with optional Artifactory caching
//!
//! Downloads go to the blocking pool since the HTTP client is synchronous.
//! When both a cache integration and a repository are supplied, the request
//! is routed through the Artifactory remote repository so the artifact gets
//! cached server-side; otherwise the upstream URL is fetched directly.

use crate::error::{SetupError, SetupResult};
use crate::integration::IntegrationRef;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Download `url` into `dest_dir`, returning the path of the written file.
///
/// The file keeps the name of the last URL segment. The download is written
/// to a `.part` file first and renamed once complete.
pub async fn download_file(
    url: &str,
    dest_dir: &Path,
    cache_repository: Option<&str>,
    cache_integration: Option<&IntegrationRef>,
) -> SetupResult<PathBuf> {
    let request_url = match (cache_integration, cache_repository) {
        (Some(integration), Some(repository)) => match integration.url.as_deref() {
            Some(base) => proxied_url(url, base, repository),
            None => {
                warn!(
                    "Integration {} has no URL configured. Downloading directly.",
                    integration.name
                );
                url.to_string()
            }
        },
        _ => url.to_string(),
    };

    let file_name = url
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| SetupError::download(url, "URL has no file name"))?;
    let dest = dest_dir.join(file_name);

    debug!("Downloading {request_url} to {}", dest.display());

    let api_key = cache_integration.and_then(|i| i.api_key.clone());
    let target = dest.clone();
    tokio::task::spawn_blocking(move || fetch(&request_url, &target, api_key.as_deref()))
        .await
        .map_err(|e| SetupError::Internal(format!("download task failed: {e}")))??;

    Ok(dest)
}

/// Rewrite an upstream URL to go through an Artifactory remote repository:
/// `<base>/<repository>/<upstream path>`.
fn proxied_url(url: &str, base: &str, repository: &str) -> String {
    let path = url
        .split_once("://")
        .and_then(|(_, rest)| rest.find('/').map(|i| &rest[i..]))
        .unwrap_or("");
    format!("{}/{}{}", base.trim_end_matches('/'), repository, path)
}

fn fetch(url: &str, dest: &Path, api_key: Option<&str>) -> SetupResult<()> {
    let mut request = ureq::get(url);
    if let Some(key) = api_key {
        request = request.header("X-JFrog-Art-Api", key);
    }
    let mut response = request.call().map_err(|e| SetupError::download(url, &e))?;

    let part = dest.with_extension("part");
    let mut file = std::fs::File::create(&part)
        .map_err(|e| SetupError::io(format!("creating {}", part.display()), e))?;
    let mut reader = response.body_mut().as_reader();
    std::io::copy(&mut reader, &mut file).map_err(|e| SetupError::download(url, &e))?;
    std::fs::rename(&part, dest)
        .map_err(|e| SetupError::io(format!("renaming {}", part.display()), e))?;
    Ok(())
}
