//! Process configuration via `adops.toml`
//!
//! The config file carries the platform client settings and the dry-run
//! identifier prefix. The dry-run flag normally comes from the command line;
//! the file value is only the default. Nothing here is read from ambient
//! process state: callers load a config once and turn it into an
//! [`OperationContext`](crate::OperationContext).

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use adops_core::{Error, IdPrefix, Result};

use crate::context::ExecutionMode;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "adops.toml";

/// Prefix used when the config file does not set one.
pub const DEFAULT_ID_PREFIX: &str = "99";

/// Ad platform client settings.
///
/// Persisted under the `[googleads]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformConfig {
    /// API version (e.g. "v202408")
    #[serde(default = "default_version")]
    pub version: String,
    /// Application name reported to the platform
    #[serde(default = "default_application_name")]
    pub application_name: String,
    /// Network code the client operates on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_code: Option<u64>,
}

fn default_version() -> String {
    "v202408".to_string()
}

fn default_application_name() -> String {
    "line-item-manager".to_string()
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            application_name: default_application_name(),
            network_code: None,
        }
    }
}

/// Dry-run identifier settings, under `[dry_run_ids]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DryRunIdConfig {
    /// Digits prepended to every synthetic id
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

impl Default for DryRunIdConfig {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
        }
    }
}

/// Configuration loaded from `adops.toml`.
///
/// # Example
///
/// ```toml
/// dry_run = false
///
/// [googleads]
/// version = "v202408"
///
/// [dry_run_ids]
/// id_prefix = "99"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OpsConfig {
    /// Simulate creates instead of mutating the platform.
    #[serde(default)]
    pub dry_run: bool,
    /// Platform client settings.
    #[serde(default)]
    pub googleads: PlatformConfig,
    /// Dry-run id settings.
    #[serde(default)]
    pub dry_run_ids: DryRunIdConfig,
}

impl OpsConfig {
    /// Override the dry-run flag (e.g. from a `--dry-run` switch).
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The validated dry-run id prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is not 1-6 digits without a leading zero.
    pub fn id_prefix(&self) -> Result<IdPrefix> {
        IdPrefix::new(self.dry_run_ids.id_prefix.clone())
    }

    /// Execution mode for entity operations.
    ///
    /// The prefix is validated even in live mode so a bad config fails
    /// before any remote call.
    pub fn execution_mode(&self) -> Result<ExecutionMode> {
        let prefix = self.id_prefix()?;
        if self.dry_run {
            Ok(ExecutionMode::DryRun { prefix })
        } else {
            Ok(ExecutionMode::Live)
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# adops configuration
#
# Simulate creates instead of mutating the platform (default: false).
# Usually overridden from the command line.
dry_run = false

[googleads]
version = "v202408"
application_name = "line-item-manager"
# network_code = 12345678

# Synthetic ids assigned in dry-run mode start with these digits
# (1-6 digits, no leading zero).
[dry_run_ids]
id_prefix = "99"
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or the prefix is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: OpsConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
        // Validate the prefix eagerly
        config.id_prefix()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config { reason } => {
                Error::config(format!("{} ({})", reason, path.display()))
            }
            other => other,
        })?;
        info!(
            target: "adops::config",
            path = %path.display(),
            dry_run = config.dry_run,
            version = %config.googleads.version,
            "Loaded config"
        );
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
