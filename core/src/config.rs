// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::{EXPORT_FILE_NAME, Error, SortKey};

/// The name of the application.
pub const APP_NAME: &str = "fosdem";

/// File name of the favorites database inside the state directory.
const DB_FILE_NAME: &str = "fosdem.db";

/// Configuration for the schedule browser.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Path to the catalog document produced by the fetcher.
    pub catalog_path: PathBuf,

    /// Directory for storing application state.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Sort order used when the browser starts.
    #[serde(default)]
    pub default_sort: SortKey,

    /// Where favorites are exported to and imported from by default.
    #[serde(default)]
    pub export_path: Option<PathBuf>,
}

impl Config {
    /// Creates a configuration reading the catalog at `catalog_path`.
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            state_dir: None,
            default_sort: SortKey::default(),
            export_path: None,
        }
    }

    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Error> {
        self.catalog_path = expand_path(&self.catalog_path)
            .map_err(|e| Error::Config(format!("Failed to expand catalog path: {e}")))?;

        match &self.state_dir {
            Some(a) => {
                self.state_dir =
                    Some(expand_path(a).map_err(|e| {
                        Error::Config(format!("Failed to expand state directory path: {e}"))
                    })?);
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!(err = e, "failed to get state directory"),
            },
        };

        if let Some(a) = &self.export_path {
            self.export_path = Some(
                expand_path(a)
                    .map_err(|e| Error::Config(format!("Failed to expand export path: {e}")))?,
            );
        }

        Ok(())
    }

    /// Path of the favorites database, `None` if favorites are not persisted.
    pub fn db_path(&self) -> Option<PathBuf> {
        self.state_dir.as_ref().map(|a| a.join(DB_FILE_NAME))
    }

    /// Default path for exported favorites.
    pub fn export_path(&self) -> PathBuf {
        self.export_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME))
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, String> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".to_owned())
}

fn get_config_dir() -> Result<PathBuf, String> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".to_owned())
}

fn get_state_dir() -> Result<PathBuf, String> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or_else(|| "User-specific state directory not found".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_home_env() {
        let home = get_home_dir().unwrap();
        let home_prefixes: &[&str] = if cfg!(unix) {
            &["~", "$HOME", "${HOME}"]
        } else {
            &[r"~", r"%UserProfile%"]
        };
        for prefix in home_prefixes {
            let result = expand_path(&PathBuf::from(format!("{prefix}/events.json"))).unwrap();
            assert_eq!(result, home.join("events.json"));
            assert!(result.is_absolute());
        }
    }

    #[test]
    fn test_expand_path_config() {
        let config_dir = get_config_dir().unwrap();
        let config_prefixes: &[&str] = if cfg!(unix) {
            &["$XDG_CONFIG_HOME", "${XDG_CONFIG_HOME}"]
        } else {
            &[r"%LOCALAPPDATA%"]
        };
        for prefix in config_prefixes {
            let result = expand_path(&PathBuf::from(format!("{prefix}/events.json"))).unwrap();
            assert_eq!(result, config_dir.join("events.json"));
            assert!(result.is_absolute());
        }
    }

    #[test]
    fn test_expand_path_absolute() {
        let absolute_path = PathBuf::from("/etc/passwd");
        let result = expand_path(&absolute_path).unwrap();
        assert_eq!(result, absolute_path);
    }

    #[test]
    fn test_expand_path_relative() {
        let relative_path = PathBuf::from("relative/path/to/file");
        let result = expand_path(&relative_path).unwrap();
        assert_eq!(result, relative_path);
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: Config = serde_json::from_str(r#"{"catalog_path": "/tmp/events.json"}"#)
            .unwrap();
        assert_eq!(config.default_sort, SortKey::Track);
        assert_eq!(config.state_dir, None);
        assert_eq!(config.export_path(), PathBuf::from(EXPORT_FILE_NAME));
    }

    #[test]
    fn test_deserialize_full() {
        let config: Config = serde_json::from_str(
            r#"{
                "catalog_path": "/tmp/events.json",
                "state_dir": "/tmp/state",
                "default_sort": "time",
                "export_path": "/tmp/favs.json"
            }"#,
        )
        .unwrap();
        assert_eq!(config.default_sort, SortKey::Time);
        assert_eq!(config.db_path(), Some(PathBuf::from("/tmp/state/fosdem.db")));
        assert_eq!(config.export_path(), PathBuf::from("/tmp/favs.json"));
    }

    #[test]
    fn test_normalize_keeps_explicit_state_dir() {
        let mut config = Config::new("/tmp/events.json");
        config.state_dir = Some(PathBuf::from("/tmp/state"));
        config.normalize().unwrap();
        assert_eq!(config.state_dir, Some(PathBuf::from("/tmp/state")));
        assert_eq!(config.catalog_path, PathBuf::from("/tmp/events.json"));
    }
}
