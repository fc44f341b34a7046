//! Runtime configuration, read from the environment.
//!
//! | Variable                | Default       |
//! |-------------------------|---------------|
//! | `INVENTORY_DATA_DIR`    | `./data`      |
//! | `INVENTORY_STORAGE_KEY` | `products_v1` |
//!
//! The log level is taken from `RUST_LOG` by [`setup_tracing`](resource_actor::tracing::setup_tracing).

use crate::product_actor::STORAGE_KEY;
use resource_actor::storage::{check_key, FileStorage};
use std::path::PathBuf;
use thiserror::Error;

pub const DATA_DIR_VAR: &str = "INVENTORY_DATA_DIR";
pub const STORAGE_KEY_VAR: &str = "INVENTORY_STORAGE_KEY";

const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),

    #[error("{var} holds an unusable storage key: {key:?}")]
    InvalidKey { var: &'static str, key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Builds the config from any variable source. `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, std::env::VarError>,
    {
        let read = |name: &'static str| match lookup(name) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
        };

        let mut config = Self::default();
        if let Some(dir) = read(DATA_DIR_VAR)? {
            if dir.trim().is_empty() {
                return Err(ConfigError::Empty(DATA_DIR_VAR));
            }
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(key) = read(STORAGE_KEY_VAR)? {
            if key.trim().is_empty() {
                return Err(ConfigError::Empty(STORAGE_KEY_VAR));
            }
            if check_key(&key).is_err() {
                return Err(ConfigError::InvalidKey {
                    var: STORAGE_KEY_VAR,
                    key,
                });
            }
            config.storage_key = key;
        }
        Ok(config)
    }

    /// File-backed storage rooted at the configured data directory.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.data_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::env::VarError;

    fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Result<String, VarError> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |name| vars.get(name).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.storage_key, "products_v1");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (DATA_DIR_VAR, "/var/lib/inventory"),
            (STORAGE_KEY_VAR, "products_v2"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/inventory"));
        assert_eq!(config.storage_key, "products_v2");
        assert_eq!(config.storage().dir(), PathBuf::from("/var/lib/inventory").as_path());
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = AppConfig::from_lookup(lookup(&[(STORAGE_KEY_VAR, "  ")]));

        assert_eq!(result, Err(ConfigError::Empty(STORAGE_KEY_VAR)));
    }

    #[test]
    fn test_path_like_key_rejected() {
        for key in ["a/b", "a\\b", ".", ".."] {
            let result = AppConfig::from_lookup(lookup(&[(STORAGE_KEY_VAR, key)]));

            assert_eq!(
                result,
                Err(ConfigError::InvalidKey {
                    var: STORAGE_KEY_VAR,
                    key: key.to_string(),
                })
            );
        }
    }
}
