//! Artifactory cache integration lookup
//!
//! The pipeline engine exposes configured integrations to steps as
//! `int_<name>_<field>` environment variables. This module wraps that
//! directory behind a trait and implements the selection rule: an explicitly
//! named integration must be an Artifactory one, while auto-discovery is
//! best-effort and absence is not an error.

use crate::error::{SetupError, SetupResult};
use tracing::info;

/// Reference to a configured pipeline integration
#[derive(Debug, Clone)]
pub struct IntegrationRef {
    /// Instance name the integration was configured under
    pub name: String,
    /// Provider type, e.g. "Artifactory" or "GitHub"
    pub master_name: String,
    /// Base URL of the provider, when the integration carries one
    pub url: Option<String>,
    /// API key for authenticated downloads, when configured
    pub api_key: Option<String>,
}

/// Directory of integrations the pipeline engine makes available to a step
pub trait IntegrationDirectory {
    /// Look up an integration by its instance name. Fails if no integration
    /// with that name is configured.
    fn get_by_name(&self, name: &str) -> SetupResult<IntegrationRef>;

    /// Find the first integration of the given provider type.
    ///
    /// `Ok(None)` means "no such integration" and is not an error; `Err` is
    /// reserved for lookup failures other than absence.
    fn find_by_type(&self, master_name: &str) -> SetupResult<Option<IntegrationRef>>;
}

/// Directory backed by the `int_<name>_<field>` environment variables
pub struct EnvIntegrationDirectory;

impl EnvIntegrationDirectory {
    fn read(name: &str) -> Option<IntegrationRef> {
        let master_name = non_empty_var(&format!("int_{name}_masterName"))?;
        Some(IntegrationRef {
            name: name.to_string(),
            master_name,
            url: non_empty_var(&format!("int_{name}_url")),
            api_key: non_empty_var(&format!("int_{name}_apikey")),
        })
    }
}

impl IntegrationDirectory for EnvIntegrationDirectory {
    fn get_by_name(&self, name: &str) -> SetupResult<IntegrationRef> {
        Self::read(name).ok_or_else(|| SetupError::IntegrationNotConfigured(name.to_string()))
    }

    fn find_by_type(&self, master_name: &str) -> SetupResult<Option<IntegrationRef>> {
        for (key, value) in std::env::vars() {
            let Some(rest) = key.strip_prefix("int_") else {
                continue;
            };
            let Some(name) = rest.strip_suffix("_masterName") else {
                continue;
            };
            if value.eq_ignore_ascii_case(master_name) {
                return Ok(Self::read(name));
            }
        }
        Ok(None)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Resolve the Artifactory integration to cache downloads through.
///
/// With an explicit name the integration must exist and be of provider type
/// "artifactory" (case-insensitive). Without one, discovery is attempted;
/// `None` means caching is skipped downstream.
pub fn find_artifactory_integration(
    directory: &dyn IntegrationDirectory,
    name: Option<&str>,
) -> SetupResult<Option<IntegrationRef>> {
    match name {
        Some(name) => {
            let integration = directory.get_by_name(name)?;
            if integration.master_name.eq_ignore_ascii_case("artifactory") {
                Ok(Some(integration))
            } else {
                Err(SetupError::IntegrationNotArtifactory(
                    integration.master_name,
                ))
            }
        }
        None => {
            info!("Searching for Artifactory integration");
            match directory.find_by_type("artifactory")? {
                Some(integration) => {
                    info!("Artifactory integration {} found", integration.name);
                    Ok(Some(integration))
                }
                None => Ok(None),
            }
        }
    }
}
