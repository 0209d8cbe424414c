//! Core configuration struct and loading logic.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file};

/// Organization whose projects are listed when nothing is configured.
pub const DEFAULT_ORGANIZATION: &str = "zeltenlabs";

/// Diagnostic log file used when nothing is configured.
pub const DEFAULT_LOG_FILE: &str = "debug.log";

/// Environment variable overriding the configured organization.
pub const ORGANIZATION_ENV_VAR: &str = "PROJBOARD_ORG";

/// The projboard configuration.
///
/// Every key is optional; missing keys take their defaults.
///
/// ```json5
/// {
///   organization: "rust-lang",
///   log_file: "/tmp/projboard.log",
/// }
/// ```
///
/// # Examples
///
/// ```
/// use projboard_config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.organization, "zeltenlabs");
/// assert_eq!(config.log_file.to_str(), Some("debug.log"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Login of the organization whose projects are listed.
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Path of the append-only diagnostic log.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_organization() -> String {
    DEFAULT_ORGANIZATION.to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Creates a configuration with every key at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations, then applies
    /// the `PROJBOARD_ORG` override.
    ///
    /// If no configuration file is found, the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, or if the resulting organization is empty.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use projboard_config::Config;
    ///
    /// # fn example() -> projboard_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Listing projects of {}", config.organization);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        let config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };

        let config = config.with_organization_override(std::env::var(ORGANIZATION_ENV_VAR).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// No environment override is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it sets
    /// an empty organization.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the organization with `organization`, if it is set and
    /// non-blank.
    #[must_use]
    pub fn with_organization_override(mut self, organization: Option<String>) -> Self {
        if let Some(organization) = organization.filter(|o| !o.trim().is_empty()) {
            self.organization = organization.trim().to_string();
        }
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyOrganization`] if the organization login
    /// is blank.
    pub fn validate(&self) -> Result<()> {
        if self.organization.trim().is_empty() {
            return Err(ConfigError::EmptyOrganization);
        }
        Ok(())
    }
}
