//! Configuration file discovery and reading.
//!
//! Both JSON5 (`.json5`) and plain JSON (`.json`) files are accepted; the
//! JSON5 parser handles either.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./projboard.json5` or `./projboard.json`
//! 2. User: `~/.config/projboard/config.json5` or `~/.config/projboard/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Configuration file names to search for, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["projboard.json5", "projboard.json"];

/// User config directory name.
const USER_CONFIG_DIR: &str = "projboard";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file path.
///
/// Returns `Some(path)` for the first existing candidate, `None` if no
/// configuration file exists.
///
/// # Examples
///
/// ```no_run
/// use projboard_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Searches `local_dir`, then `<user_dir>/projboard`, for a config file.
fn find_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .map(|dir| dir.join(USER_CONFIG_DIR))
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.exists())
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed into `T`.
///
/// # Examples
///
/// ```no_run
/// use projboard_config::persistence::read_config_file;
/// use projboard_config::Config;
///
/// # fn main() -> projboard_config::Result<()> {
/// let config: Config = read_config_file("projboard.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Deserialize)]
    struct TestConfig {
        name: String,
        value: i32,
    }

    #[test]
    fn read_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.json");
        std::fs::write(&path, r#"{"name": "test", "value": 42}"#).unwrap();

        let config: TestConfig = read_config_file(&path).unwrap();
        assert_eq!(config.name, "test");
        assert_eq!(config.value, 42);
    }

    #[test]
    fn read_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.json5");
        std::fs::write(
            &path,
            r#"
            {
                // comments are allowed
                name: "test",
                value: 42,
            }
            "#,
        )
        .unwrap();

        let config: TestConfig = read_config_file(&path).unwrap();
        assert_eq!(config, TestConfig { name: "test".into(), value: 42 });
    }

    #[test]
    fn read_nonexistent_file() {
        let result: Result<TestConfig> = read_config_file("/nonexistent/path.json");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn read_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invalid.json");
        std::fs::write(&path, "not valid json").unwrap();

        let result: Result<TestConfig> = read_config_file(&path);
        assert!(matches!(result, Err(ConfigError::ParseJson5(_))));
    }

    #[test]
    fn local_json5_wins_over_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("projboard.json"), "{}").unwrap();
        std::fs::write(dir.path().join("projboard.json5"), "{}").unwrap();

        let found = find_in(dir.path(), None).unwrap();
        assert!(found.ends_with("projboard.json5"));
    }

    #[test]
    fn local_file_wins_over_user_file() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        std::fs::create_dir(user.path().join(USER_CONFIG_DIR)).unwrap();
        std::fs::write(user.path().join(USER_CONFIG_DIR).join("config.json5"), "{}").unwrap();
        std::fs::write(local.path().join("projboard.json"), "{}").unwrap();

        let found = find_in(local.path(), Some(user.path())).unwrap();
        assert!(found.ends_with("projboard.json"));
    }

    #[test]
    fn falls_back_to_user_config() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        std::fs::create_dir(user.path().join(USER_CONFIG_DIR)).unwrap();
        std::fs::write(user.path().join(USER_CONFIG_DIR).join("config.json"), "{}").unwrap();

        let found = find_in(local.path(), Some(user.path())).unwrap();
        assert_eq!(found, user.path().join(USER_CONFIG_DIR).join("config.json"));
    }

    #[test]
    fn nothing_found() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        assert_eq!(find_in(local.path(), Some(user.path())), None);
        assert_eq!(find_in(local.path(), None), None);
    }
}
