//! Configuration management

use crate::domain::TitlePolicy;
use crate::error::{BearError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "BEAR_TOOLS_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub title_policy: TitlePolicy,
    pub pretty: bool,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BearError::Config(format!("Config file not found: {}", path.display()))
            } else {
                BearError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            BearError::Config(format!(
                "Config file {} could not be parsed: {}",
                path.display(),
                e
            ))
        })
    }

    /// Resolve configuration from an explicit path, then `BEAR_TOOLS_CONFIG`,
    /// then defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::resolve(explicit, from_env.as_deref())
    }

    fn resolve(explicit: Option<&Path>, from_env: Option<&Path>) -> Result<Self> {
        match explicit.or(from_env) {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                Self::load_from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = temp.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.title_policy, TitlePolicy::Last);
        assert!(!config.pretty);
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "bear.toml", "title_policy = \"first\"\npretty = true\n");

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.title_policy, TitlePolicy::First);
        assert!(config.pretty);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "bear.toml", "pretty = true\n");

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.title_policy, TitlePolicy::Last);
        assert!(config.pretty);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from_file(&temp.path().join("absent.toml"));

        match result.unwrap_err() {
            BearError::Config(msg) => assert!(msg.contains("Config file not found")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_policy() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "bear.toml", "title_policy = \"middle\"\n");

        assert!(matches!(
            Config::load_from_file(&path),
            Err(BearError::Config(_))
        ));
    }

    #[test]
    fn test_load_unknown_key() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "bear.toml", "colour = \"blue\"\n");

        assert!(Config::load_from_file(&path).is_err());
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let temp = TempDir::new().unwrap();
        let explicit = write_config(&temp, "a.toml", "title_policy = \"first\"\n");
        let env = write_config(&temp, "b.toml", "pretty = true\n");

        let config = Config::resolve(Some(&explicit), Some(&env)).unwrap();
        assert_eq!(config.title_policy, TitlePolicy::First);
        assert!(!config.pretty);
    }

    #[test]
    fn test_resolve_falls_back_to_env_path() {
        let temp = TempDir::new().unwrap();
        let env = write_config(&temp, "b.toml", "pretty = true\n");

        let config = Config::resolve(None, Some(&env)).unwrap();
        assert!(config.pretty);
    }

    #[test]
    fn test_resolve_defaults_without_paths() {
        assert_eq!(Config::resolve(None, None).unwrap(), Config::default());
    }
}
