//! Configuration management for projboard.
//!
//! The configuration is small: the organization whose projects are listed
//! and the path of the diagnostic log.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`persistence`]: Config file discovery and reading
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Environment variable `PROJBOARD_ORG` (organization only)
//! 2. Local config (`./projboard.json5` or `./projboard.json`)
//! 3. User config (`~/.config/projboard/config.json5` or `~/.config/projboard/config.json`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use projboard_config::Config;
//!
//! # fn example() -> projboard_config::Result<()> {
//! let config = Config::load()?;
//! println!("{} -> {}", config.organization, config.log_file.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, DEFAULT_LOG_FILE, DEFAULT_ORGANIZATION, ORGANIZATION_ENV_VAR};
pub use error::{ConfigError, Result};
