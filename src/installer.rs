//! Toolchain package installation
//!
//! Resolves the download for the current platform, fetches the package
//! (optionally through the Artifactory cache) and extracts it into the
//! target folder. No retries; any failure stops the run.

use crate::error::{SetupError, SetupResult};
use crate::integration::IntegrationRef;
use crate::pipeline::{archive, transfer};
use crate::platform::{self, ArchiveKind, Platform};
use semver::Version;
use std::path::Path;
use tracing::{info, warn};

/// Download and extract the Go distribution for `version` into `target`.
pub async fn install(
    version: &Version,
    target: &Path,
    cache_integration: Option<&IntegrationRef>,
    cache_repository: Option<&str>,
) -> SetupResult<()> {
    let spec = platform::resolve_download(&platform::GO, version, &Platform::current())?;
    info!("Go package url: {}", spec.url);

    if cache_integration.is_none() || cache_repository.is_none() {
        warn!("Cache configuration not set. Caching will be skipped.");
    }

    let package =
        transfer::download_file(&spec.url, target, cache_repository, cache_integration).await?;

    info!("Extracting package content");
    let dest = target.to_path_buf();
    let archive_kind = spec.archive;
    tokio::task::spawn_blocking(move || match archive_kind {
        ArchiveKind::Zip => archive::extract_zip(&package, &dest),
        ArchiveKind::TarGz => archive::extract_tar_gz(&package, &dest),
    })
    .await
    .map_err(|e| SetupError::Internal(format!("extraction task failed: {e}")))??;

    Ok(())
}
