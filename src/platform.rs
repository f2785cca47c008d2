//! Platform resolution for toolchain downloads
//!
//! Maps the agent's OS family and CPU architecture to the download URL and
//! archive kind for a requested version. Pure functions, no I/O; the archive
//! kind is computed once here and carried alongside the URL so download and
//! extraction can never disagree about it.

use crate::error::{SetupError, SetupResult};
use semver::Version;

/// A toolchain distribution endpoint.
///
/// The tool name and host are parameters so the resolver is not welded to
/// one toolchain; the shipped instance is [`GO`].
#[derive(Debug, Clone, Copy)]
pub struct Distribution {
    pub tool: &'static str,
    pub base_url: &'static str,
}

/// The official Go distribution
pub const GO: Distribution = Distribution {
    tool: "go",
    base_url: "https://go.dev/dl",
};

/// Archive format of a distribution package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    TarGz,
    Zip,
}

impl ArchiveKind {
    /// File extension used in download URLs
    pub fn extension(self) -> &'static str {
        match self {
            Self::TarGz => "tar.gz",
            Self::Zip => "zip",
        }
    }
}

/// Resolved download target: URL plus the archive kind it points at
#[derive(Debug, Clone)]
pub struct DownloadSpec {
    pub url: String,
    pub archive: ArchiveKind,
}

/// OS family and CPU architecture of the build agent, in the naming
/// convention the pipeline engine uses ("Linux"/"Windows"/"Darwin",
/// "x86_64"/"ARM64").
#[derive(Debug, Clone)]
pub struct Platform {
    pub os_family: String,
    pub arch: String,
}

impl Platform {
    /// Detect the platform the step is running on.
    pub fn current() -> Self {
        let os_family = match std::env::consts::OS {
            "linux" => "Linux",
            "windows" => "Windows",
            "macos" => "Darwin",
            other => other,
        };
        let arch = match std::env::consts::ARCH {
            "aarch64" => "ARM64",
            other => other,
        };
        Self {
            os_family: os_family.to_string(),
            arch: arch.to_string(),
        }
    }
}

/// Resolve the download URL and archive kind for a version on a platform.
///
/// The architecture must be one the distribution publishes binaries for;
/// the OS family is lowercased and used verbatim in the URL. Windows
/// packages are zip archives, everything else is tar+gzip.
pub fn resolve_download(
    dist: &Distribution,
    version: &Version,
    platform: &Platform,
) -> SetupResult<DownloadSpec> {
    let arch = match platform.arch.as_str() {
        "x86_64" => "amd64",
        "ARM64" => "arm64",
        _ => return Err(SetupError::UnsupportedArchitecture),
    };
    let os_family = platform.os_family.to_lowercase();
    let archive = if os_family == "windows" {
        ArchiveKind::Zip
    } else {
        ArchiveKind::TarGz
    };
    let url = format!(
        "{}/{}{}.{}-{}.{}",
        dist.base_url,
        dist.tool,
        version,
        os_family,
        arch,
        archive.extension()
    );
    Ok(DownloadSpec { url, archive })
}
