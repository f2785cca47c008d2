//! Archive extraction for downloaded toolchain packages
//!
//! Blocking functions; callers run them on the blocking pool. The archive's
//! own directory layout is preserved (a Go package carries everything under
//! a top-level `go/` folder, which the rest of the step relies on).

use crate::error::{SetupError, SetupResult};
use flate2::read::GzDecoder;
use std::fs::File;
use std::path::{Component, Path};

/// Extract a tar+gzip archive into `dest_dir`.
///
/// Entries with absolute paths or parent-directory components are rejected.
pub fn extract_tar_gz(archive_path: &Path, dest_dir: &Path) -> SetupResult<()> {
    let file = File::open(archive_path)
        .map_err(|e| SetupError::io(format!("opening {}", archive_path.display()), e))?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));

    let entries = archive
        .entries()
        .map_err(|e| SetupError::extract(archive_path, e))?;
    for (i, entry) in entries.enumerate() {
        let mut entry = entry.map_err(|e| SetupError::extract(archive_path, e))?;
        let entry_path = entry
            .path()
            .map_err(|e| SetupError::extract(archive_path, e))?
            .into_owned();
        if entry_path.is_absolute()
            || entry_path
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(SetupError::extract(
                archive_path,
                format!("unsafe path in archive entry {i}"),
            ));
        }
        entry
            .unpack_in(dest_dir)
            .map_err(|e| SetupError::extract(archive_path, e))?;
    }
    Ok(())
}

/// Extract a zip archive into `dest_dir`.
///
/// Entries with absolute paths or parent-directory components are rejected.
pub fn extract_zip(archive_path: &Path, dest_dir: &Path) -> SetupResult<()> {
    let file = File::open(archive_path)
        .map_err(|e| SetupError::io(format!("opening {}", archive_path.display()), e))?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| SetupError::extract(archive_path, e))?;

    std::fs::create_dir_all(dest_dir)
        .map_err(|e| SetupError::io(format!("creating {}", dest_dir.display()), e))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| SetupError::extract(archive_path, e))?;

        let entry_path = entry.enclosed_name().ok_or_else(|| {
            SetupError::extract(archive_path, format!("unsafe path in archive entry {i}"))
        })?;
        if entry_path.is_absolute()
            || entry_path
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(SetupError::extract(
                archive_path,
                format!("unsafe path in archive entry {i}"),
            ));
        }

        let output_path = dest_dir.join(&entry_path);
        if entry.is_dir() {
            std::fs::create_dir_all(&output_path)
                .map_err(|e| SetupError::io(format!("creating {}", output_path.display()), e))?;
            continue;
        }

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SetupError::io(format!("creating {}", parent.display()), e))?;
        }
        let mut out = File::create(&output_path)
            .map_err(|e| SetupError::io(format!("creating {}", output_path.display()), e))?;
        std::io::copy(&mut entry, &mut out)
            .map_err(|e| SetupError::extract(archive_path, e))?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&output_path, std::fs::Permissions::from_mode(mode))
                .map_err(|e| SetupError::io(format!("chmod {}", output_path.display()), e))?;
        }
    }

    Ok(())
}
